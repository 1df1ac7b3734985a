//! fyyur-web - venue, artist and show listing service
//!
//! Resolves configuration (CLI > environment > TOML > defaults), opens the
//! SQLite database and serves the HTTP API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_toml_config, ServerConfig};
use fyyur_common::db::init_database;
use fyyur_web::cli::Args;
use fyyur_web::db::SqliteStore;
use fyyur_web::logging::{bootstrap_subscriber, init_tracing};
use fyyur_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config_path();
    // Config loading logs before the configured subscriber exists
    let toml_config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        load_toml_config(&config_path)
    })
    .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config_found = toml_config.is_some();
    let config = ServerConfig::resolve(args.overrides(), toml_config);

    init_tracing(&config.logging)?;

    // Build identification first, before any database delay
    info!(
        "Starting Fyyur (fyyur-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if config_found {
        info!("Configuration: {}", config_path.display());
    }
    info!("Database path: {}", config.database_path.display());

    let pool = match init_database(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e).context("Failed to initialize database");
        }
    };

    let state = AppState::new(Arc::new(SqliteStore::new(pool)));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("fyyur-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
