use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::{DomainError, DomainResult};

/// Role a user holds inside a single app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppMemberRole {
    Admin,
    Developer,
    Tester,
    Operator,
    Architect,
    Manager,
}

/// Roles allowed to modify or delete an app
pub const OPERATE_APP_ROLES: [AppMemberRole; 2] = [AppMemberRole::Admin, AppMemberRole::Manager];

impl AppMemberRole {
    pub fn code(self) -> i32 {
        match self {
            Self::Admin => 1,
            Self::Developer => 2,
            Self::Tester => 3,
            Self::Operator => 4,
            Self::Architect => 5,
            Self::Manager => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Admin),
            2 => Some(Self::Developer),
            3 => Some(Self::Tester),
            4 => Some(Self::Operator),
            5 => Some(Self::Architect),
            6 => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn can_operate_app(self) -> bool {
        OPERATE_APP_ROLES.contains(&self)
    }
}

/// Parse the stored comma-separated role list, e.g. `"1,6"`.
///
/// Unknown or non-numeric tokens are dropped with a warning.
pub fn parse_role_types(raw: &str) -> Vec<AppMemberRole> {
    let mut roles = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<i32>().ok().and_then(AppMemberRole::from_code) {
            Some(role) if !roles.contains(&role) => roles.push(role),
            Some(_) => {}
            None => warn!(token, "Skipping unknown app member role"),
        }
    }
    roles
}

pub fn format_role_types(roles: &[AppMemberRole]) -> String {
    roles
        .iter()
        .map(|r| r.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// App member model
#[derive(Debug, Clone, PartialEq)]
pub struct AppMember {
    pub id: String,
    pub app_id: String,
    pub user_id: String,
    pub login_name: String,
    pub roles: Vec<AppMemberRole>,
    pub creation_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl AppMember {
    pub fn can_operate_app(&self) -> bool {
        self.roles.iter().any(|r| r.can_operate_app())
    }
}

#[derive(Debug, Clone)]
pub struct CreateAppMember {
    pub app_id: String,
    pub user_id: String,
    pub login_name: String,
    pub roles: Vec<AppMemberRole>,
}

/// Removes one user from one app
#[derive(Debug, Clone)]
pub struct AppMemberDeletion {
    pub app_id: String,
    pub login_name: String,
}

impl AppMemberDeletion {
    pub fn validate(&self) -> DomainResult<()> {
        if self.app_id.trim().is_empty() {
            return Err(DomainError::Validation("App id is required".to_string()));
        }
        if self.login_name.trim().is_empty() {
            return Err(DomainError::Validation("Login name is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(roles: Vec<AppMemberRole>) -> AppMember {
        AppMember {
            id: "m1".into(),
            app_id: "a1".into(),
            user_id: "u1".into(),
            login_name: "alice".into(),
            roles,
            creation_time: Utc::now(),
            update_time: Utc::now(),
        }
    }

    #[test]
    fn parse_role_list() {
        assert_eq!(
            parse_role_types("1,3"),
            vec![AppMemberRole::Admin, AppMemberRole::Tester]
        );
        assert_eq!(parse_role_types(" 6 , 6 "), vec![AppMemberRole::Manager]);
        assert!(parse_role_types("").is_empty());
    }

    #[test]
    fn parse_skips_garbage_tokens() {
        assert_eq!(
            parse_role_types("x,2,,42"),
            vec![AppMemberRole::Developer]
        );
    }

    #[test]
    fn format_role_list() {
        assert_eq!(
            format_role_types(&[AppMemberRole::Developer, AppMemberRole::Manager]),
            "2,6"
        );
        assert_eq!(format_role_types(&[]), "");
    }

    #[test]
    fn operate_rights_require_admin_or_manager() {
        assert!(member(vec![AppMemberRole::Admin]).can_operate_app());
        assert!(member(vec![AppMemberRole::Tester, AppMemberRole::Manager]).can_operate_app());
        assert!(!member(vec![AppMemberRole::Developer, AppMemberRole::Operator]).can_operate_app());
        assert!(!member(vec![]).can_operate_app());
    }

    #[test]
    fn deletion_requires_both_fields() {
        let ok = AppMemberDeletion {
            app_id: "a1".into(),
            login_name: "bob".into(),
        };
        assert!(ok.validate().is_ok());

        let missing_app = AppMemberDeletion {
            app_id: " ".into(),
            login_name: "bob".into(),
        };
        assert!(matches!(missing_app.validate(), Err(DomainError::Validation(_))));

        let missing_login = AppMemberDeletion {
            app_id: "a1".into(),
            login_name: String::new(),
        };
        assert!(matches!(missing_login.validate(), Err(DomainError::Validation(_))));
    }
}
