use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but holds no right on the target record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn no_access_right() -> Self {
        DomainError::Forbidden("No access right".to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Database(e) => {
                let msg = e.to_string();
                if msg.contains("UNIQUE") || msg.contains("duplicate") {
                    DomainError::Conflict(msg)
                } else {
                    DomainError::Storage(msg)
                }
            }
            InfraError::Serialization(e) => DomainError::Validation(format!("Malformed JSON: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err: DomainError = InfraError::Database(sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: apps.app_name".into(),
        ))
        .into();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn other_db_errors_are_storage_errors() {
        let err: DomainError =
            InfraError::Database(sea_orm::DbErr::Custom("connection reset".into())).into();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[test]
    fn bad_json_maps_to_validation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: DomainError = InfraError::Serialization(json_err).into();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
