//! GameTracker server: game library, accounts and reviews over HTTP.
//!
//! Main entry point that loads configuration, sets up logging and starts
//! the server.

use tracing_subscriber::{EnvFilter, fmt};

use gametracker_core::config::AppConfig;
use gametracker_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if config.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the shipped placeholder; set JWT_SECRET in production");
    }

    if let Err(e) = gametracker_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `GAMETRACKER_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GAMETRACKER_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
