use async_trait::async_trait;

use super::{App, AppPageQuery, CreateApp, UpdateApp};
use crate::domain::{DomainResult, LoginUser};
use crate::shared::PageData;

/// Permission-aware persistence for apps.
///
/// Every operation taking a `LoginUser` filters or gates by the caller's
/// system role and app membership.
#[async_trait]
pub trait AppRepository: Send + Sync {
    async fn page(&self, login_user: &LoginUser, query: AppPageQuery) -> DomainResult<PageData<App>>;

    async fn query(&self, login_user: &LoginUser, id: Option<&str>) -> DomainResult<Option<App>>;
    async fn query_with_extend_by_id(&self, id: &str) -> DomainResult<Option<App>>;
    async fn query_with_extend_for(&self, login_user: &LoginUser, id: &str) -> DomainResult<Option<App>>;
    async fn query_by_app_name(&self, app_name: &str) -> DomainResult<Option<App>>;

    /// Inserts the app, its extension and, for a non-admin creator, an admin
    /// membership in one transaction. The returned app carries operate rights.
    async fn create(&self, login_user: &LoginUser, dto: CreateApp) -> DomainResult<App>;
    async fn update(&self, login_user: &LoginUser, dto: UpdateApp) -> DomainResult<bool>;
    async fn delete(&self, login_user: &LoginUser, id: &str) -> DomainResult<bool>;

    async fn has_operating_rights(&self, login_user: &LoginUser, id: &str) -> DomainResult<bool>;
}
