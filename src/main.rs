//! Person Cache - HTTP gateway between PostgreSQL and Redis.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use person_cache::api::create_router;
use person_cache::store::{PgRecordStore, RedisCacheStore};
use person_cache::{AppState, Config, StoreBackend};

/// Main entry point for the person gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to PostgreSQL and Redis (fatal on failure)
/// 4. Start HTTP server on configured port
/// 5. On SIGINT/SIGTERM, drain requests and close the database pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "person_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting person cache gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={:?}, port={}, db_max_connections={}",
        config.backend, config.server_port, config.database_max_connections
    );

    let (state, records) = match config.backend {
        StoreBackend::External => {
            let records =
                PgRecordStore::connect(&config.database_url, config.database_max_connections)
                    .await
                    .context("failed to connect to PostgreSQL")?;
            let cache = RedisCacheStore::connect(&config.redis_url)
                .await
                .context("failed to connect to Redis")?;
            let state = AppState::new(Arc::new(records.clone()), Arc::new(cache));
            (state, Some(records))
        }
        StoreBackend::Memory => {
            info!("Using in-memory stores");
            (AppState::in_memory(), None)
        }
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(records) = records {
        records.close().await;
        info!("PostgreSQL pool closed");
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
