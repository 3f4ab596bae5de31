//! Application configuration schemas.
//!
//! Configuration is assembled once at startup from TOML files and the
//! environment via the `config` crate, validated, and then shared
//! read-only for the lifetime of the process.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, PasswordHashConfig};
pub use self::database::{DatabaseConfig, StoreBackend};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides, e.g.
/// `GAMETRACKER__AUTH__TOKEN_TTL_DAYS=7`.
const ENV_PREFIX: &str = "GAMETRACKER";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `GAMETRACKER__*` variables, and finally the
    /// conventional `PORT`, `JWT_SECRET` and `DATABASE_URL` variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document, without consulting the
    /// environment.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.auth.token_ttl_days <= 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_days must be positive",
            ));
        }
        if self.auth.password_min_length == 0 {
            return Err(AppError::configuration(
                "auth.password_min_length must be positive",
            ));
        }
        if self.database.backend == StoreBackend::Postgres && self.database.url.trim().is_empty()
        {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }
        Ok(())
    }

    /// Returns `true` when the shipped placeholder signing secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.auth.jwt_secret == auth::INSECURE_DEFAULT_SECRET
    }
}
