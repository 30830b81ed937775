//! Sello Server — application entry point.

use sello_db::DbManager;
use sello_server::config::ServerConfig;
use sello_server::{AppState, build_router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sello=info".parse().unwrap()))
        .json()
        .init();

    let config = ServerConfig::load();

    tracing::info!(tenant = %config.tenant_code, "Starting Sello server...");

    let manager = DbManager::connect(&config.db)
        .await
        .expect("Database misconfigured!");
    manager.health().await.expect("Database health check failed!");

    sello_db::run_migrations(manager.client())
        .await
        .expect("Migrations failed!");

    let state = AppState::new(manager.client().clone(), config.tenant_code);
    let app = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Port unavailable!");

    tracing::info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server crashed!");
}
