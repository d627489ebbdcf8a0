use chrono::{DateTime, Utc};
use std::fmt;

/// Programming language of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageType {
    Java,
    Node,
    Go,
    Python,
    Html,
}

impl LanguageType {
    pub fn code(self) -> i32 {
        match self {
            Self::Java => 1,
            Self::Node => 2,
            Self::Go => 3,
            Self::Python => 4,
            Self::Html => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Java),
            2 => Some(Self::Node),
            3 => Some(Self::Go),
            4 => Some(Self::Python),
            5 => Some(Self::Html),
            _ => None,
        }
    }

    /// Whether apps of this language carry an extension record.
    pub fn has_extension(self) -> bool {
        matches!(self, Self::Java)
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java => write!(f, "Java"),
            Self::Node => write!(f, "Node"),
            Self::Go => write!(f, "Go"),
            Self::Python => write!(f, "Python"),
            Self::Html => write!(f, "Html"),
        }
    }
}

/// Build tool used to package a Java app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageBuildType {
    #[default]
    Maven,
    Gradle,
}

impl PackageBuildType {
    pub fn code(self) -> i32 {
        match self {
            Self::Maven => 1,
            Self::Gradle => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Maven),
            2 => Some(Self::Gradle),
            _ => None,
        }
    }
}

/// Artifact format of a Java app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageFileType {
    #[default]
    Jar,
    War,
}

impl PackageFileType {
    pub fn code(self) -> i32 {
        match self {
            Self::Jar => 1,
            Self::War => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Jar),
            2 => Some(Self::War),
            _ => None,
        }
    }
}

/// Java-specific build settings of an app
#[derive(Debug, Clone, PartialEq)]
pub struct AppExtendJava {
    pub id: String,
    pub app_id: String,
    pub package_build_type: PackageBuildType,
    pub package_file_type: PackageFileType,
    pub package_target_path: Option<String>,
    pub java_home: Option<String>,
    pub base_image: Option<String>,
    pub jvm_args: Option<String>,
    pub creation_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Language-specific extension attached to an app
#[derive(Debug, Clone, PartialEq)]
pub enum AppExtend {
    Java(AppExtendJava),
}

/// Application model
///
/// `modify_rights` and `delete_rights` are computed per caller by the
/// permission-filtered queries and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub id: String,
    pub app_name: String,
    pub language_type: LanguageType,
    pub code_repo_path: Option<String>,
    pub description: Option<String>,
    pub creation_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub modify_rights: bool,
    pub delete_rights: bool,
    pub app_extend: Option<AppExtend>,
}

impl App {
    pub fn grant_operate_rights(&mut self) {
        self.modify_rights = true;
        self.delete_rights = true;
    }

    pub fn java_extend(&self) -> Option<&AppExtendJava> {
        match &self.app_extend {
            Some(AppExtend::Java(ext)) => Some(ext),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [
            LanguageType::Java,
            LanguageType::Node,
            LanguageType::Go,
            LanguageType::Python,
            LanguageType::Html,
        ] {
            assert_eq!(LanguageType::from_code(lang.code()), Some(lang));
        }
        assert_eq!(LanguageType::from_code(0), None);
    }

    #[test]
    fn only_java_has_extension() {
        assert!(LanguageType::Java.has_extension());
        assert!(!LanguageType::Go.has_extension());
    }

    #[test]
    fn grant_operate_rights_sets_both_flags() {
        let now = Utc::now();
        let mut app = App {
            id: "a1".into(),
            app_name: "order-service".into(),
            language_type: LanguageType::Go,
            code_repo_path: None,
            description: None,
            creation_time: now,
            update_time: now,
            modify_rights: false,
            delete_rights: false,
            app_extend: None,
        };
        app.grant_operate_rights();
        assert!(app.modify_rights && app.delete_rights);
        assert!(app.java_extend().is_none());
    }
}
