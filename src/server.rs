//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and the Axum server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::RecordStore;
use crate::infrastructure::persistence::{InMemoryRecordStore, RedisRecordStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::key_codec::Base62Codec;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the configured record store.
///
/// # Errors
///
/// Returns an error if the Redis endpoint is missing or unreachable.
pub async fn build_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let url = config
                .store_url
                .as_deref()
                .context("Redis backend selected but no store endpoint configured")?;
            let store = RedisRecordStore::connect(url, config.store_timeout())
                .await
                .context("Failed to connect to the record store")?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory record store; records are lost on restart");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
    }
}

/// Wires the shortener service over a store.
pub fn build_service(config: &Config, store: Arc<dyn RecordStore>) -> ShortenerService {
    ShortenerService::new(store, Arc::new(Base62Codec::new()), &config.public_base_url)
        .with_max_attempts(config.max_attempts)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (Redis, validated with PING, or in-memory)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let shortener = Arc::new(build_service(&config, store));
    let state = AppState::new(shortener);

    let app = app_router(state, &config.api_base_path);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
