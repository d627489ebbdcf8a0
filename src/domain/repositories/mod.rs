//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate repositories.

use super::app::AppRepository;
use super::app_member::AppMemberRepository;
use super::global_config::GlobalConfigRepository;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider, user: &LoginUser) {
///     let page = repos.apps().page(user, AppPageQuery::default()).await?;
///     let agg = repos.global_configs().query_agg(Default::default()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn apps(&self) -> &dyn AppRepository;
    fn app_members(&self) -> &dyn AppMemberRepository;
    fn global_configs(&self) -> &dyn GlobalConfigRepository;
}
