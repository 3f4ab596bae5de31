//! Response bodies.

use serde::{Deserialize, Serialize};

use gametracker_core::types::UserId;
use gametracker_entity::user::Identity;
use gametracker_service::AuthSession;

/// Returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            id: session.user.id,
            username: session.user.username,
            email: session.user.email,
            token: session.token,
        }
    }
}

/// The caller's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<Identity> for ProfileResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            email: identity.email,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"ok"` or `"unavailable"`.
    pub store: String,
}
