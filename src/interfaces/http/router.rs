//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{apps, global_configs, health, AppState};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::ping,
        health::health_check,
        apps::search_apps,
        apps::create_app,
        apps::get_app,
        apps::update_app,
        apps::delete_app,
        apps::delete_member,
        global_configs::get_global_configs,
        global_configs::save_global_config,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            apps::AppPageRequest,
            apps::AppPageResponse,
            apps::AppResponse,
            apps::AppExtendJavaDto,
            apps::CreateAppRequest,
            apps::CreateAppExtendJavaRequest,
            apps::UpdateAppRequest,
            apps::DeleteMemberRequest,
            global_configs::SaveGlobalConfigRequest,
            global_configs::SavedGlobalConfigResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness ping used by peer nodes, and readiness"),
        (name = "Apps", description = "Application CRUD filtered by system role and app membership"),
        (name = "Global Configs", description = "LDAP, repositories, Maven, trace and env templates"),
    ),
    info(
        title = "DHorse Console API",
        version = "1.0.0",
        description = "Application and global configuration management for the DHorse deployment console",
        license(name = "Apache-2.0")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState { jwt_config };
    let app_state = AppState { repos };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        .route("/health/ping", get(health::ping));

    // Protected
    let api_routes = Router::new()
        .route("/api/v1/apps", post(apps::create_app))
        .route("/api/v1/apps/search", post(apps::search_apps))
        .route(
            "/api/v1/apps/{id}",
            get(apps::get_app)
                .put(apps::update_app)
                .delete(apps::delete_app),
        )
        .route("/api/v1/apps/{id}/members", delete(apps::delete_member))
        .route(
            "/api/v1/global-configs",
            get(global_configs::get_global_configs).put(global_configs::save_global_config),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
