//! Folio server entry point.
//!
//! Bootstraps the message store from configuration, then starts the
//! Axum HTTP server with graceful shutdown on SIGINT/SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use folio_server::config::{ServerConfig, StoreBackendType};
use folio_server::state::AppState;
use folio_store::{FileStore, MemoryStore, MessageStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(store = ?config.store_backend, "folio starting");

    // Bootstrap the message store.
    let store: Arc<dyn MessageStore> = match &config.store_backend {
        StoreBackendType::Memory => {
            info!("using in-memory store (messages will not persist)");
            Arc::new(MemoryStore::new())
        }
        StoreBackendType::File { path } => {
            info!(path = %path, "using file store");
            Arc::new(FileStore::new(path))
        }
    };

    let state = Arc::new(AppState { store });
    let app = folio_server::build_router(state);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "folio server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("folio server stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
