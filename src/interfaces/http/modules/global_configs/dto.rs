//! Global config DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, GlobalConfigItem, GlobalConfigItemType};

fn item_type_from_code(code: i32) -> DomainResult<GlobalConfigItemType> {
    GlobalConfigItemType::from_code(code)
        .ok_or_else(|| DomainError::Validation(format!("Unknown global config item type: {}", code)))
}

/// Filters for the aggregate view
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfigParams {
    /// Restrict to one item type (1 LDAP .. 6 env template)
    pub item_type: Option<i32>,
}

impl GlobalConfigParams {
    pub fn item_type(&self) -> DomainResult<Option<GlobalConfigItemType>> {
        self.item_type.map(item_type_from_code).transpose()
    }
}

/// Saves one configuration item.
///
/// Singleton types (LDAP, code repo, image repo, Maven) are upserted; other
/// types are added, or updated in place when `id` is given.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveGlobalConfigRequest {
    #[validate(range(min = 1, max = 6))]
    pub item_type: i32,
    #[validate(length(min = 1, max = 64))]
    pub id: Option<String>,
    #[schema(value_type = Object)]
    pub item_value: serde_json::Value,
}

impl SaveGlobalConfigRequest {
    pub fn item(&self) -> DomainResult<GlobalConfigItem> {
        let item_type = item_type_from_code(self.item_type)?;
        GlobalConfigItem::from_json(item_type, &self.item_value.to_string())
            .map_err(|e| DomainError::Validation(format!("Invalid {} payload: {}", item_type, e)))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedGlobalConfigResponse {
    pub id: String,
    pub item_type: i32,
}
