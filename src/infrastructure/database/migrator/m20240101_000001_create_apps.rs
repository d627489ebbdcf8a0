//! Create apps table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Apps::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Apps::AppName).string().not_null())
                    .col(ColumnDef::new(Apps::LanguageType).integer().not_null())
                    .col(ColumnDef::new(Apps::CodeRepoPath).string())
                    .col(ColumnDef::new(Apps::Description).string())
                    .col(
                        ColumnDef::new(Apps::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Apps::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Apps::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Names are unique among live apps only; a soft-deleted name may be reused.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_apps_app_name \
                 ON apps (app_name) WHERE NOT deleted",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Apps {
    Table,
    Id,
    AppName,
    LanguageType,
    CodeRepoPath,
    Description,
    Deleted,
    CreationTime,
    UpdateTime,
}
