//! `AuthUser` extractor: the gate in front of every protected route.
//!
//! Pulls the bearer token from the Authorization header, verifies it and
//! resolves the identity it names, rejecting on the first failure.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use tracing::warn;

use gametracker_core::error::AppError;
use gametracker_entity::user::Identity;

use crate::error::ApiError;
use crate::state::AppState;

const NO_TOKEN: &str = "Not authorized, no token provided.";
const BAD_TOKEN: &str = "Not authorized, token invalid or expired.";
const UNKNOWN_USER: &str = "Not authorized, user not found.";

/// The authenticated caller, loaded without its password hash.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    /// Returns the resolved identity.
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::authentication(NO_TOKEN))?;

        let user_id = state.jwt_decoder.verify(bearer.token()).map_err(|e| {
            warn!(path = %parts.uri.path(), reason = %e.message, "Rejected bearer token");
            AppError::authentication(BAD_TOKEN)
        })?;

        let identity = state
            .stores
            .users
            .find_identity(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Token names a user that no longer exists");
                AppError::authentication(UNKNOWN_USER)
            })?;

        Ok(AuthUser(identity))
    }
}
