//! Binary entry point for the driver salary service.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use driver_salary::api::{AppState, create_router};
use driver_salary::config::ServiceConfig;
use driver_salary::store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServiceConfig::from_env()?;

    info!(database_url = %config.database_url, "Opening data store");
    let store = SqliteStore::connect(&config.database_url).await?;

    let state = AppState::new(Arc::new(store), config.aggregation_options());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
