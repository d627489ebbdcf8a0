//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::app::AppRepository;
use crate::domain::app_member::AppMemberRepository;
use crate::domain::global_config::GlobalConfigRepository;
use crate::domain::repositories::RepositoryProvider;

use super::app_member_repository::SeaOrmAppMemberRepository;
use super::app_repository::SeaOrmAppRepository;
use super::global_config_repository::SeaOrmGlobalConfigRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let app = repos.apps().query_by_app_name("order-service").await?;
/// let agg = repos.global_configs().query_agg(Default::default()).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    apps: SeaOrmAppRepository,
    app_members: SeaOrmAppMemberRepository,
    global_configs: SeaOrmGlobalConfigRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            apps: SeaOrmAppRepository::new(db.clone()),
            app_members: SeaOrmAppMemberRepository::new(db.clone()),
            global_configs: SeaOrmGlobalConfigRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn apps(&self) -> &dyn AppRepository {
        &self.apps
    }

    fn app_members(&self) -> &dyn AppMemberRepository {
        &self.app_members
    }

    fn global_configs(&self) -> &dyn GlobalConfigRepository {
        &self.global_configs
    }
}
