use async_trait::async_trait;

use super::{
    GlobalConfigAgg, GlobalConfigItem, GlobalConfigItemType, GlobalConfigQuery, GlobalConfigRow,
    GlobalConfigUpdate,
};
use crate::domain::DomainResult;

#[async_trait]
pub trait GlobalConfigRepository: Send + Sync {
    async fn query_by_item_type(
        &self,
        item_type: GlobalConfigItemType,
    ) -> DomainResult<Option<GlobalConfigRow>>;
    async fn query_agg(&self, query: GlobalConfigQuery) -> DomainResult<GlobalConfigAgg>;

    async fn add(&self, item: GlobalConfigItem) -> DomainResult<GlobalConfigRow>;
    async fn save_singleton(&self, item: GlobalConfigItem) -> DomainResult<GlobalConfigRow>;
    async fn update(&self, dto: GlobalConfigUpdate) -> DomainResult<bool>;
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}
