//! App DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    App, AppExtendJava, AppPageQuery, CreateApp, CreateAppExtendJava, DomainError, DomainResult,
    LanguageType, PackageBuildType, PackageFileType, UpdateApp,
};
use crate::shared::{PageData, PageQuery};

fn language_from_code(code: i32) -> DomainResult<LanguageType> {
    LanguageType::from_code(code)
        .ok_or_else(|| DomainError::Validation(format!("Unknown language type: {}", code)))
}

/// Search filters for `POST /api/v1/apps/search`
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppPageRequest {
    #[validate(length(max = 64))]
    pub app_name: Option<String>,
    pub language_type: Option<i32>,
    #[validate(range(min = 1))]
    pub page_num: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

impl AppPageRequest {
    pub fn into_query(self) -> DomainResult<AppPageQuery> {
        Ok(AppPageQuery {
            app_name: self.app_name.filter(|n| !n.trim().is_empty()),
            language_type: self.language_type.map(language_from_code).transpose()?,
            page: PageQuery {
                page_num: self.page_num,
                page_size: self.page_size,
            },
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppExtendJavaDto {
    pub package_build_type: i32,
    pub package_file_type: i32,
    pub package_target_path: Option<String>,
    pub java_home: Option<String>,
    pub base_image: Option<String>,
    pub jvm_args: Option<String>,
}

impl From<&AppExtendJava> for AppExtendJavaDto {
    fn from(e: &AppExtendJava) -> Self {
        Self {
            package_build_type: e.package_build_type.code(),
            package_file_type: e.package_file_type.code(),
            package_target_path: e.package_target_path.clone(),
            java_home: e.java_home.clone(),
            base_image: e.base_image.clone(),
            jvm_args: e.jvm_args.clone(),
        }
    }
}

/// App as returned to API callers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse {
    pub id: String,
    pub app_name: String,
    pub language_type: i32,
    pub code_repo_path: Option<String>,
    pub description: Option<String>,
    pub creation_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub modify_rights: bool,
    pub delete_rights: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_java: Option<AppExtendJavaDto>,
}

impl From<App> for AppResponse {
    fn from(app: App) -> Self {
        let extend_java = app.java_extend().map(AppExtendJavaDto::from);
        Self {
            id: app.id,
            app_name: app.app_name,
            language_type: app.language_type.code(),
            code_repo_path: app.code_repo_path,
            description: app.description,
            creation_time: app.creation_time,
            update_time: app.update_time,
            modify_rights: app.modify_rights,
            delete_rights: app.delete_rights,
            extend_java,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppPageResponse {
    pub page_num: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub item_count: u64,
    pub items: Vec<AppResponse>,
}

impl From<PageData<App>> for AppPageResponse {
    fn from(page: PageData<App>) -> Self {
        let page = page.map(AppResponse::from);
        Self {
            page_num: page.page_num,
            page_count: page.page_count,
            page_size: page.page_size,
            item_count: page.item_count,
            items: page.items,
        }
    }
}

/// Java settings accepted on create; codes default to Maven and Jar.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppExtendJavaRequest {
    pub package_build_type: Option<i32>,
    pub package_file_type: Option<i32>,
    #[validate(length(max = 256))]
    pub package_target_path: Option<String>,
    #[validate(length(max = 256))]
    pub java_home: Option<String>,
    #[validate(length(max = 256))]
    pub base_image: Option<String>,
    #[validate(length(max = 1024))]
    pub jvm_args: Option<String>,
}

impl CreateAppExtendJavaRequest {
    fn into_params(self) -> DomainResult<CreateAppExtendJava> {
        let package_build_type = match self.package_build_type {
            Some(code) => PackageBuildType::from_code(code).ok_or_else(|| {
                DomainError::Validation(format!("Unknown package build type: {}", code))
            })?,
            None => PackageBuildType::default(),
        };
        let package_file_type = match self.package_file_type {
            Some(code) => PackageFileType::from_code(code).ok_or_else(|| {
                DomainError::Validation(format!("Unknown package file type: {}", code))
            })?,
            None => PackageFileType::default(),
        };
        Ok(CreateAppExtendJava {
            package_build_type,
            package_file_type,
            package_target_path: self.package_target_path,
            java_home: self.java_home,
            base_image: self.base_image,
            jvm_args: self.jvm_args,
        })
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppRequest {
    #[validate(length(min = 1, max = 64))]
    pub app_name: String,
    pub language_type: i32,
    #[validate(length(max = 256))]
    pub code_repo_path: Option<String>,
    #[validate(length(max = 512))]
    pub description: Option<String>,
    #[validate(nested)]
    pub extend_java: Option<CreateAppExtendJavaRequest>,
}

impl CreateAppRequest {
    pub fn into_params(self) -> DomainResult<CreateApp> {
        Ok(CreateApp {
            app_name: self.app_name.trim().to_string(),
            language_type: language_from_code(self.language_type)?,
            code_repo_path: self.code_repo_path,
            description: self.description,
            extend_java: self.extend_java.map(|e| e.into_params()).transpose()?,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppRequest {
    #[validate(length(min = 1, max = 64))]
    pub app_name: Option<String>,
    #[validate(length(max = 256))]
    pub code_repo_path: Option<String>,
    #[validate(length(max = 512))]
    pub description: Option<String>,
}

impl UpdateAppRequest {
    pub fn into_params(self, id: String) -> UpdateApp {
        UpdateApp {
            id,
            app_name: self.app_name.map(|n| n.trim().to_string()),
            code_repo_path: self.code_repo_path,
            description: self.description,
        }
    }
}

/// Removes one member from an app
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMemberRequest {
    #[validate(length(min = 1, max = 64))]
    pub login_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_rejects_unknown_language() {
        let req = AppPageRequest {
            language_type: Some(42),
            ..Default::default()
        };
        assert!(matches!(req.into_query(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn page_request_drops_blank_name_filter() {
        let req = AppPageRequest {
            app_name: Some("  ".into()),
            language_type: Some(1),
            page_num: Some(2),
            page_size: None,
        };
        let query = req.into_query().unwrap();
        assert!(query.app_name.is_none());
        assert_eq!(query.language_type, Some(LanguageType::Java));
        assert_eq!(query.page.page_num(), 2);
        assert_eq!(query.page.page_size(), 20);
    }

    #[test]
    fn create_request_defaults_java_codes() {
        let req: CreateAppRequest = serde_json::from_str(
            r#"{"appName":" order-service ","languageType":1,"extendJava":{"jvmArgs":"-Xmx512m"}}"#,
        )
        .unwrap();
        let params = req.into_params().unwrap();
        assert_eq!(params.app_name, "order-service");
        let ext = params.extend_java.unwrap();
        assert_eq!(ext.package_build_type, PackageBuildType::Maven);
        assert_eq!(ext.package_file_type, PackageFileType::Jar);
        assert_eq!(ext.jvm_args.as_deref(), Some("-Xmx512m"));
    }

    #[test]
    fn create_request_rejects_unknown_build_type() {
        let req: CreateAppRequest = serde_json::from_str(
            r#"{"appName":"svc","languageType":1,"extendJava":{"packageBuildType":9}}"#,
        )
        .unwrap();
        assert!(matches!(req.into_params(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_request_validation_bounds_name() {
        let req: CreateAppRequest =
            serde_json::from_str(r#"{"appName":"","languageType":2}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
