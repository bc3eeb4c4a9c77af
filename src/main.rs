//! StovaSpot API server
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use stovaspot::{
    config::Settings,
    database::DatabaseService,
    handlers::router,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", stovaspot::info());

    let database = DatabaseService::connect(&settings.database).await?;
    let services = Arc::new(ServiceFactory::new(database, settings.clone()));

    let health = services.health_check().await;
    if !health.is_healthy() {
        error!("Store is not reachable at startup");
    }

    let app = router(services);

    let address = settings.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("API server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    info!("StovaSpot has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
