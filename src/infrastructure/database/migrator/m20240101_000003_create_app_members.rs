//! Create app_members table

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
                    .table(AppMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppMembers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AppMembers::AppId).string().not_null())
                    .col(ColumnDef::new(AppMembers::UserId).string().not_null())
                    .col(ColumnDef::new(AppMembers::LoginName).string().not_null())
                    .col(ColumnDef::new(AppMembers::RoleType).string().not_null())
                    .col(
                        ColumnDef::new(AppMembers::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppMembers::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_members_app")
                            .from(AppMembers::Table, AppMembers::AppId)
                            .to(Apps::Table, Apps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership row per (app, login name)
        manager
            .create_index(
                Index::create()
                    .name("idx_app_members_app_login")
                    .table(AppMembers::Table)
                    .col(AppMembers::AppId)
                    .col(AppMembers::LoginName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_app_members_user_id")
                    .table(AppMembers::Table)
                    .col(AppMembers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppMembers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AppMembers {
    Table,
    Id,
    AppId,
    UserId,
    LoginName,
    RoleType,
    CreationTime,
    UpdateTime,
}
