//! Create app_extend_java table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_apps::Apps;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppExtendJava::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppExtendJava::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AppExtendJava::AppId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AppExtendJava::PackageBuildType)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(AppExtendJava::PackageFileType)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(AppExtendJava::PackageTargetPath).string())
                    .col(ColumnDef::new(AppExtendJava::JavaHome).string())
                    .col(ColumnDef::new(AppExtendJava::BaseImage).string())
                    .col(ColumnDef::new(AppExtendJava::JvmArgs).string())
                    .col(
                        ColumnDef::new(AppExtendJava::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppExtendJava::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_extend_java_app")
                            .from(AppExtendJava::Table, AppExtendJava::AppId)
                            .to(Apps::Table, Apps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppExtendJava::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AppExtendJava {
    Table,
    Id,
    AppId,
    PackageBuildType,
    PackageFileType,
    PackageTargetPath,
    JavaHome,
    BaseImage,
    JvmArgs,
    CreationTime,
    UpdateTime,
}
