//! JWT claims carried by every bearer token.

use serde::{Deserialize, Serialize};

use gametracker_core::types::UserId;

/// Claims payload. The token carries nothing but the subject and its
/// validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id.
    pub sub: UserId,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user id from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }
}
