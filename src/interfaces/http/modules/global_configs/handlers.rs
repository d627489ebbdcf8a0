//! Global config API handlers (system admins only)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{GlobalConfigParams, SaveGlobalConfigRequest, SavedGlobalConfigResponse};
use crate::domain::{
    DomainError, GlobalConfigAgg, GlobalConfigQuery, GlobalConfigUpdate, LoginUser,
};
use crate::interfaces::http::common::{api_error, domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

fn require_admin(user: &LoginUser) -> Result<(), ApiError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(domain_error(DomainError::no_access_right()))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/global-configs",
    tag = "Global Configs",
    security(("bearer_auth" = [])),
    params(GlobalConfigParams),
    responses(
        (status = 200, description = "Aggregated configuration: singletons plus trace and env templates"),
        (status = 403, description = "Not a system admin")
    )
)]
pub async fn get_global_configs(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    Query(params): Query<GlobalConfigParams>,
) -> Result<Json<ApiResponse<GlobalConfigAgg>>, ApiError> {
    require_admin(&user)?;
    let query = GlobalConfigQuery {
        item_type: params.item_type().map_err(domain_error)?,
        ids: None,
    };
    let agg = state
        .repos
        .global_configs()
        .query_agg(query)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(agg)))
}

#[utoipa::path(
    put,
    path = "/api/v1/global-configs",
    tag = "Global Configs",
    security(("bearer_auth" = [])),
    request_body = SaveGlobalConfigRequest,
    responses(
        (status = 200, description = "Item saved", body = ApiResponse<SavedGlobalConfigResponse>),
        (status = 400, description = "Payload does not match the item type"),
        (status = 403, description = "Not a system admin"),
        (status = 404, description = "No item with that id"),
        (status = 409, description = "Singleton already exists")
    )
)]
pub async fn save_global_config(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    ValidatedJson(request): ValidatedJson<SaveGlobalConfigRequest>,
) -> Result<Json<ApiResponse<SavedGlobalConfigResponse>>, ApiError> {
    require_admin(&user)?;
    let item = request.item().map_err(domain_error)?;
    let item_type = item.item_type();
    let repo = state.repos.global_configs();

    let id = if item_type.is_singleton() {
        repo.save_singleton(item).await.map_err(domain_error)?.id
    } else if let Some(id) = request.id.clone() {
        let changed = repo
            .update(GlobalConfigUpdate {
                id: Some(id.clone()),
                item_type: Some(item_type),
                item,
            })
            .await
            .map_err(domain_error)?;
        if !changed {
            return Err(api_error(
                StatusCode::NOT_FOUND,
                format!("Global config '{}' not found", id),
            ));
        }
        id
    } else {
        repo.add(item).await.map_err(domain_error)?.id
    };

    info!(id = %id, item_type = %item_type, by = %user.login_name, "Global config saved");
    Ok(Json(ApiResponse::success(SavedGlobalConfigResponse {
        id,
        item_type: item_type.code(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleType;

    #[test]
    fn only_admins_pass() {
        let admin = LoginUser {
            id: "1".into(),
            login_name: "root".into(),
            role_type: RoleType::Admin,
        };
        let normal = LoginUser {
            role_type: RoleType::Normal,
            ..admin.clone()
        };
        assert!(require_admin(&admin).is_ok());
        let (status, _) = require_admin(&normal).unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
