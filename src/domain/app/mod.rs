//! Application aggregate
//!
//! Contains the App entity, its language-specific extension, the query and
//! command parameters, and the repository interface.

pub mod model;
pub mod repository;

mod params;

pub use model::{
    App, AppExtend, AppExtendJava, LanguageType, PackageBuildType, PackageFileType,
};
pub use params::{AppPageQuery, CreateApp, CreateAppExtendJava, UpdateApp};
pub use repository::AppRepository;
