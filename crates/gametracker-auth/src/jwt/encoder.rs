//! Token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use gametracker_core::config::AuthConfig;
use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::days(config.token_ttl_days),
        }
    }

    /// Issues a token for the given user, valid for the configured lifetime.
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    /// Issues a token with an explicit lifetime. A negative lifetime yields
    /// a token that is already expired.
    pub fn issue_with_ttl(&self, user_id: UserId, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to sign token", e)
        })
    }
}
