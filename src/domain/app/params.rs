use super::{LanguageType, PackageBuildType, PackageFileType};
use crate::shared::PageQuery;

/// Filters for paging apps
#[derive(Debug, Clone, Default)]
pub struct AppPageQuery {
    /// Substring match on the app name
    pub app_name: Option<String>,
    pub language_type: Option<LanguageType>,
    pub page: PageQuery,
}

/// Java extension settings supplied on create
#[derive(Debug, Clone, Default)]
pub struct CreateAppExtendJava {
    pub package_build_type: PackageBuildType,
    pub package_file_type: PackageFileType,
    pub package_target_path: Option<String>,
    pub java_home: Option<String>,
    pub base_image: Option<String>,
    pub jvm_args: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateApp {
    pub app_name: String,
    pub language_type: LanguageType,
    pub code_repo_path: Option<String>,
    pub description: Option<String>,
    pub extend_java: Option<CreateAppExtendJava>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateApp {
    pub id: String,
    pub app_name: Option<String>,
    pub code_repo_path: Option<String>,
    pub description: Option<String>,
}
