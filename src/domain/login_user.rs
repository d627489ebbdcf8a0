use serde::{Deserialize, Serialize};

/// System-level permission tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleType {
    Admin,
    Normal,
}

impl RoleType {
    pub fn code(self) -> i32 {
        match self {
            Self::Admin => 1,
            Self::Normal => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Admin),
            2 => Some(Self::Normal),
            _ => None,
        }
    }
}

impl Default for RoleType {
    fn default() -> Self {
        Self::Normal
    }
}

/// The authenticated caller of a repository operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginUser {
    pub id: String,
    pub login_name: String,
    pub role_type: RoleType,
}

impl LoginUser {
    pub fn is_admin(&self) -> bool {
        self.role_type == RoleType::Admin
    }
}
