//! Serve command - runs the clinic API until Ctrl-C.

use std::sync::Arc;

use tokio::{net::TcpListener, signal};

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Connect (applying pending migrations), build the router and serve it.
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let database = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Could not open clinic database: {}", e)))?;

    let router = create_router(AppState::from_config(Arc::new(database), &config)?);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Cannot listen on {}: {}", addr, e)))?;

    tracing::info!(%addr, "Clinic records API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server stopped: {}", e)))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Could not install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested, draining connections");
}
