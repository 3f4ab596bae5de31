//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in `default.toml`; a warning is logged when
/// the server starts with it.
pub const INSECURE_DEFAULT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: i64,
    /// Accepted clock skew when checking expiry, in seconds.
    #[serde(default = "default_leeway")]
    pub token_leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 work factor.
    #[serde(default)]
    pub password_hash: PasswordHashConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            token_leeway_seconds: default_leeway(),
            password_min_length: default_password_min(),
            password_hash: PasswordHashConfig::default(),
        }
    }
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_jwt_secret() -> String {
    INSECURE_DEFAULT_SECRET.to_string()
}

fn default_token_ttl() -> i64 {
    30
}

fn default_leeway() -> u64 {
    5
}

fn default_password_min() -> usize {
    6
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
