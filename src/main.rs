mod adapter;
mod alerts;
mod calendar;
mod catalog;
mod config;
mod error;
mod history;
mod model;
mod provider;
mod routes;
mod server;
mod state;

use clap::Parser;
use std::sync::Arc;
use tracing::info;

use config::{AppConfig, CliArgs, MISSING_API_KEY};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farefinder=info,tower_http=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting farefinder v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_args(args);
    info!("Provider endpoint: {}", config.provider_url);
    info!("Credential configured: {}", config.api_key != MISSING_API_KEY);

    let port = config.port;
    let state = Arc::new(AppState::new(config));

    let router = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal");
}
