//! Application builder: wires stores, services and the router, then serves.

use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use gametracker_auth::password::PasswordHasher;
use gametracker_core::config::{AppConfig, StoreBackend};
use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::traits::CredentialHasher;
use gametracker_database::connection::DatabasePool;
use gametracker_database::migration::run_migrations;
use gametracker_database::store::Stores;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the GameTracker server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting GameTracker v{}", env!("CARGO_PKG_VERSION"));

    let hasher: Arc<dyn CredentialHasher> =
        Arc::new(PasswordHasher::new(&config.auth.password_hash)?);

    // ── Stores ───────────────────────────────────────────────────
    let (stores, pool) = match config.database.backend {
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                run_migrations(pool.pool()).await?;
            }
            (Stores::postgres(&pool, Arc::clone(&hasher)), Some(pool))
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on shutdown");
            (Stores::memory(Arc::clone(&hasher)), None)
        }
    };

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, stores, hasher));

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(%addr, "GameTracker listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("GameTracker stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
