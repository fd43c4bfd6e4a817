//! # Mercado API
//!
//! HTTP server for the product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Mercado API Server                        │
//! │                                                                 │
//! │  Client ───► axum (3000) ───► handlers ───► PostgreSQL pool    │
//! │                  │                                              │
//! │                  └── CORS (permissive) + request tracing        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod routes;

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mercado_db::Database;

use crate::config::ApiConfig;
use crate::routes::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Mercado API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        db_host = %config.db_host,
        db_name = %config.db_name,
        "Configuration loaded"
    );

    // Create the (lazy) database pool. The server comes up even with
    // PostgreSQL unreachable; /health reports the state.
    let db = Database::connect(&config.db_config());

    // Best-effort schema initialization off the startup path. GET /init
    // remains available for clients that relied on it.
    let schema_db = db.clone();
    tokio::spawn(async move {
        match schema_db.ensure_schema().await {
            Ok(()) => info!("Schema initialization complete"),
            Err(err) => warn!(%err, "Schema initialization failed, /init can retry it"),
        }
    });

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
    };

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "Servidor corriendo");
    info!(entorno = %config.environment, despliegue = %config.deployment, "Entorno");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
