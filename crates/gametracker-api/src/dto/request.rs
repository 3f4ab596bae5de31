//! Request bodies.
//!
//! Every field is optional at the wire level so that a missing field is
//! reported with the endpoint's own message rather than a parse error.

use serde::{Deserialize, Serialize};

use gametracker_core::error::AppError;
use gametracker_core::types::GameId;
use gametracker_entity::review::{Rating, ReviewEdit};
use gametracker_service::ProfileUpdate;

const MISSING_REVIEW_FIELDS: &str = "Please provide the game ID, review text and rating.";

/// POST /users/register
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users/login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PUT /users/me
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// POST /reviews
///
/// Any owner field in the body is ignored; the owner is the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub game: Option<String>,
    pub text: Option<String>,
    /// Kept as raw JSON so that `4.5` or `"5"` get the rating message.
    pub rating: Option<serde_json::Value>,
}

/// A create-review body with every field checked.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub game_id: GameId,
    pub text: String,
    pub rating: Rating,
}

impl CreateReviewRequest {
    /// Check presence first, then the rating, then the game id.
    pub fn into_draft(self) -> Result<ReviewDraft, AppError> {
        let (Some(game), Some(text), Some(rating)) = (self.game, self.text, self.rating) else {
            return Err(AppError::validation(MISSING_REVIEW_FIELDS));
        };
        if game.trim().is_empty() || text.trim().is_empty() || rating.is_null() {
            return Err(AppError::validation(MISSING_REVIEW_FIELDS));
        }

        let rating = Rating::from_json_value(&rating)?;
        let game_id = GameId::parse(&game)?;

        Ok(ReviewDraft {
            game_id,
            text,
            rating,
        })
    }
}

/// PUT /reviews/{id}
///
/// Only text and rating are read; `game` and `user` are ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<serde_json::Value>,
}

impl From<UpdateReviewRequest> for ReviewEdit {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            text: req.text,
            rating: req.rating,
        }
    }
}
