use async_trait::async_trait;

use super::{AppMember, AppMemberDeletion, AppMemberRole, CreateAppMember};
use crate::domain::DomainResult;
use crate::shared::{PageData, PageQuery};

#[async_trait]
pub trait AppMemberRepository: Send + Sync {
    async fn list_by_user_id(&self, user_id: &str) -> DomainResult<Vec<AppMember>>;
    async fn page_by_user_id(&self, user_id: &str, page: PageQuery) -> DomainResult<PageData<AppMember>>;
    async fn query_by_login_name_and_app_id(
        &self,
        login_name: &str,
        app_id: &str,
    ) -> DomainResult<Option<AppMember>>;

    async fn add(&self, dto: CreateAppMember) -> DomainResult<AppMember>;
    async fn update_roles(
        &self,
        app_id: &str,
        login_name: &str,
        roles: &[AppMemberRole],
    ) -> DomainResult<bool>;
    async fn delete(&self, param: AppMemberDeletion) -> DomainResult<bool>;
    async fn delete_by_app_id(&self, app_id: &str) -> DomainResult<u64>;
}
