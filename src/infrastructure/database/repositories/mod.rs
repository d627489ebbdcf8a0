//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod app_extend_java_repository;
pub mod app_member_repository;
pub mod app_repository;
pub mod global_config_repository;
pub mod repository_provider;

pub use app_extend_java_repository::SeaOrmAppExtendJavaRepository;
pub use app_member_repository::SeaOrmAppMemberRepository;
pub use app_repository::SeaOrmAppRepository;
pub use global_config_repository::SeaOrmGlobalConfigRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;
use crate::shared::InfraError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    InfraError::Database(e).into()
}
