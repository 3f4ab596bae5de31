//! Convenience result type alias for GameTracker.

use crate::error::AppError;

/// A specialized `Result` type for GameTracker operations.
pub type AppResult<T> = Result<T, AppError>;
