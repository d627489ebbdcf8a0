//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_apps;
mod m20240101_000002_create_app_extend_java;
mod m20240101_000003_create_app_members;
mod m20240101_000004_create_global_configs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_apps::Migration),
            Box::new(m20240101_000002_create_app_extend_java::Migration),
            Box::new(m20240101_000003_create_app_members::Migration),
            Box::new(m20240101_000004_create_global_configs::Migration),
        ]
    }
}
