//! Create global_configs table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GlobalConfigs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GlobalConfigs::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GlobalConfigs::ItemType).integer().not_null())
                    .col(ColumnDef::new(GlobalConfigs::ItemValue).text())
                    .col(
                        ColumnDef::new(GlobalConfigs::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(GlobalConfigs::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalConfigs::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_global_configs_item_type")
                    .table(GlobalConfigs::Table)
                    .col(GlobalConfigs::ItemType)
                    .to_owned(),
            )
            .await?;

        // At most one live row per singleton type (LDAP, code repo, image repo, Maven).
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_global_configs_singleton \
                 ON global_configs (item_type) WHERE NOT deleted AND item_type IN (1, 2, 3, 4)",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalConfigs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum GlobalConfigs {
    Table,
    Id,
    ItemType,
    ItemValue,
    Deleted,
    CreationTime,
    UpdateTime,
}
