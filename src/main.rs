// ABOUTME: Entry point for the pagepulse binary.
// ABOUTME: Initializes tracing, opens the event store, and serves HTTP until Ctrl-C.

use std::sync::Arc;

use pagepulse_server::{AppState, ServerConfig, SharedState, create_router};
use pagepulse_store::EventStore;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagepulse=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // A store that cannot open or create its schema is fatal; nothing
    // downstream can operate correctly without it.
    let store = EventStore::open(&config.db_path)?;
    let state: SharedState = Arc::new(AppState::new(store));

    let app = create_router(Arc::clone(&state)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "pagepulse listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    Ok(())
}

/// Wait for Ctrl-C, then raise the app-wide shutdown signal so every live
/// stream ends and graceful shutdown can complete.
async fn shutdown_signal(state: SharedState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutdown signal received");
    state.trigger_shutdown();
}
