use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use video_store::config::Config;
use video_store::server::{create_router, AppState};
use video_store::storage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse_args();

    // Initialize tracing with configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    config.validate()?;

    tracing::info!("Starting video-store");
    tracing::debug!(?config, "Configuration loaded");

    let store = storage::create_store(&config.store)?;
    let app = create_router(AppState {
        store,
        max_event_bytes: config.max_event_bytes,
    });

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, backend = ?config.store.storage_backend, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
