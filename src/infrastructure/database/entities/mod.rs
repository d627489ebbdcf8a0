//! Database entities module

pub mod app;
pub mod app_extend_java;
pub mod app_member;
pub mod global_config;

pub use app::Entity as App;
pub use app_extend_java::Entity as AppExtendJava;
pub use app_member::Entity as AppMember;
pub use global_config::Entity as GlobalConfig;
