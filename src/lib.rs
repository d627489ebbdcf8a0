//! # DHorse console service
//!
//! Data access and authorization for the DHorse deployment console.
//!
//! ## Architecture
//!
//! - **domain**: apps, app members, global configs, the login user and the
//!   repository traits that enforce membership permissions
//! - **infrastructure**: SeaORM persistence, JWT, and the outbound HTTP client
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: errors, pagination, shutdown

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{
    init_database, DatabaseConfig, HttpClient, HttpClientConfig, SeaOrmRepositoryProvider,
};

pub use interfaces::http::create_api_router;
