//! Domain layer
//!
//! Business entities, repository traits and the permission rules that gate
//! application CRUD.

pub mod app;
pub mod app_member;
pub mod global_config;
pub mod login_user;
pub mod repositories;

pub use app::{
    App, AppExtend, AppExtendJava, AppPageQuery, AppRepository, CreateApp, CreateAppExtendJava,
    LanguageType, PackageBuildType, PackageFileType, UpdateApp,
};
pub use app_member::{
    AppMember, AppMemberDeletion, AppMemberRepository, AppMemberRole, CreateAppMember,
    OPERATE_APP_ROLES,
};
pub use global_config::{
    GlobalConfigAgg, GlobalConfigItem, GlobalConfigItemType, GlobalConfigQuery,
    GlobalConfigRepository, GlobalConfigRow, GlobalConfigUpdate,
};
pub use login_user::{LoginUser, RoleType};
pub use repositories::RepositoryProvider;

pub use crate::shared::errors::{DomainError, DomainResult};
