//! DHorse console service
//!
//! Reads configuration from a TOML file (`$DHORSE_CONFIG`, or
//! ~/.config/dhorse/config.toml) and serves the REST API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dhorse::domain::RepositoryProvider;
use dhorse::infrastructure::database::migrator::Migrator;
use dhorse::shared::shutdown::{listen_for_shutdown_signals, ShutdownSignal};
use dhorse::{
    create_api_router, default_config_path, init_database, AppConfig, HttpClient,
    SeaOrmRepositoryProvider,
};

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Configuration ──────────────────────────────────────────
    let config_path = std::env::var("DHORSE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level, cfg.logging.json);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_tracing("info", false);
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting DHorse console service...");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // ── Peers ──────────────────────────────────────────────────
    let http_client = HttpClient::new(app_cfg.http_client_config())?;
    for peer in &app_cfg.cluster.peers {
        if http_client.ping_server(peer).await {
            info!(peer = %peer, "Peer is alive");
        } else {
            warn!(peer = %peer, "Peer did not answer ping");
        }
    }

    // ── REST API ───────────────────────────────────────────────
    let jwt_config = app_cfg.jwt_config();
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );
    let api_router = create_api_router(repos, db.clone(), jwt_config);

    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown.clone();
    let server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
        api_shutdown.wait().await;
        info!("REST API server received shutdown signal");
    });

    let drain_timeout = std::time::Duration::from_secs(app_cfg.server.shutdown_timeout);
    let mut server = tokio::spawn(async move { server.await });
    tokio::select! {
        result = &mut server => log_server_exit(result),
        _ = shutdown.wait() => {
            match tokio::time::timeout(drain_timeout, &mut server).await {
                Ok(result) => log_server_exit(result),
                Err(_) => warn!("Graceful shutdown timed out after {}s", drain_timeout.as_secs()),
            }
        }
    }

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("DHorse console service shutdown complete");
    Ok(())
}

fn log_server_exit(result: Result<std::io::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => info!("REST API server stopped"),
        Ok(Err(e)) => error!("REST API server error: {}", e),
        Err(e) => error!("REST API server task panicked: {}", e),
    }
}
