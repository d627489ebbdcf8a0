//! App API handlers
//!
//! Every route runs behind the auth middleware; permission checks happen in
//! the repository against the `LoginUser` it inserted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use super::dto::{
    AppPageRequest, AppPageResponse, AppResponse, CreateAppRequest, DeleteMemberRequest,
    UpdateAppRequest,
};
use crate::domain::{AppMemberDeletion, DomainError, LoginUser};
use crate::interfaces::http::common::{api_error, domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

fn app_not_found(id: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, format!("App '{}' not found", id))
}

#[utoipa::path(
    post,
    path = "/api/v1/apps/search",
    tag = "Apps",
    security(("bearer_auth" = [])),
    request_body = AppPageRequest,
    responses(
        (status = 200, description = "One page of visible apps", body = ApiResponse<AppPageResponse>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn search_apps(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    ValidatedJson(request): ValidatedJson<AppPageRequest>,
) -> Result<Json<ApiResponse<AppPageResponse>>, ApiError> {
    let query = request.into_query().map_err(domain_error)?;
    let page = state
        .repos
        .apps()
        .page(&user, query)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/apps",
    tag = "Apps",
    security(("bearer_auth" = [])),
    request_body = CreateAppRequest,
    responses(
        (status = 201, description = "App created", body = ApiResponse<AppResponse>),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "App name already taken")
    )
)]
pub async fn create_app(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    ValidatedJson(request): ValidatedJson<CreateAppRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AppResponse>>), ApiError> {
    let params = request.into_params().map_err(domain_error)?;
    let app = state
        .repos
        .apps()
        .create(&user, params)
        .await
        .map_err(domain_error)?;

    info!(app_id = %app.id, app_name = %app.app_name, creator = %user.login_name, "App created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(app.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/apps/{id}",
    tag = "Apps",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "App ID")),
    responses(
        (status = 200, description = "App with its extension", body = ApiResponse<AppResponse>),
        (status = 404, description = "Not found or not a member")
    )
)]
pub async fn get_app(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AppResponse>>, ApiError> {
    match state
        .repos
        .apps()
        .query_with_extend_for(&user, &id)
        .await
        .map_err(domain_error)?
    {
        Some(app) => Ok(Json(ApiResponse::success(app.into()))),
        None => Err(app_not_found(&id)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/apps/{id}",
    tag = "Apps",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "App ID")),
    request_body = UpdateAppRequest,
    responses(
        (status = 200, description = "App updated", body = ApiResponse<AppResponse>),
        (status = 403, description = "No access right"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_app(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAppRequest>,
) -> Result<Json<ApiResponse<AppResponse>>, ApiError> {
    let apps = state.repos.apps();
    if !apps
        .update(&user, request.into_params(id.clone()))
        .await
        .map_err(domain_error)?
    {
        return Err(app_not_found(&id));
    }

    let mut app = apps
        .query_with_extend_for(&user, &id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| app_not_found(&id))?;
    app.grant_operate_rights();
    Ok(Json(ApiResponse::success(app.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/apps/{id}",
    tag = "Apps",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "App ID")),
    responses(
        (status = 200, description = "App deleted"),
        (status = 403, description = "No access right"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_app(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state
        .repos
        .apps()
        .delete(&user, &id)
        .await
        .map_err(domain_error)?
    {
        return Err(app_not_found(&id));
    }
    info!(app_id = %id, by = %user.login_name, "App deleted");
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/apps/{id}/members",
    tag = "Apps",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "App ID")),
    request_body = DeleteMemberRequest,
    responses(
        (status = 200, description = "Member removed"),
        (status = 403, description = "No access right"),
        (status = 404, description = "App or member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Extension(user): Extension<LoginUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<DeleteMemberRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state
        .repos
        .apps()
        .has_operating_rights(&user, &id)
        .await
        .map_err(domain_error)?
    {
        return Err(domain_error(DomainError::no_access_right()));
    }

    let removed = state
        .repos
        .app_members()
        .delete(AppMemberDeletion {
            app_id: id.clone(),
            login_name: request.login_name.clone(),
        })
        .await
        .map_err(domain_error)?;
    if !removed {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            format!("'{}' is not a member of app '{}'", request.login_name, id),
        ));
    }
    Ok(Json(ApiResponse::success(())))
}
