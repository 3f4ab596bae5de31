//! Typed path identifiers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use gametracker_core::error::AppError;
use gametracker_core::types::{GameId, ReviewId};

use crate::error::ApiError;

/// An identifier parsed from the single `{id}` path segment.
///
/// A malformed identifier is a validation error, never a 404.
#[derive(Debug, Clone, Copy)]
pub struct PathId<T>(pub T);

/// Identifier types accepted by [`PathId`].
pub trait ParseId: Sized {
    /// Parse a client-supplied identifier.
    fn parse_id(raw: &str) -> Result<Self, AppError>;
}

impl ParseId for GameId {
    fn parse_id(raw: &str) -> Result<Self, AppError> {
        GameId::parse(raw)
    }
}

impl ParseId for ReviewId {
    fn parse_id(raw: &str) -> Result<Self, AppError> {
        ReviewId::parse(raw)
    }
}

impl<T, S> FromRequestParts<S> for PathId<T>
where
    T: ParseId + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        T::parse_id(&raw).map(PathId).map_err(ApiError::from)
    }
}
