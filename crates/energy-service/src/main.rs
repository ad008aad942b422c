//! Energy Service - HTTP API for energy usage data
//!
//! This is the main entry point for the energy service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use energy_service::{create_router, AppState, ServiceConfig};
use energy_store::PgStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,energy_service=debug,energy_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Energy Service");

    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        audit_log = %config.audit_log_path.display(),
        max_connections = config.database_max_connections,
        "Service configuration loaded"
    );

    tracing::info!("Connecting to PostgreSQL");
    let store = PgStore::connect(&config.database_url, config.database_max_connections).await?;

    let state = AppState::new(Arc::new(store), config.clone());

    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
