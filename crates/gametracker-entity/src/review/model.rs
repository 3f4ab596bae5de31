//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use gametracker_core::error::AppError;
use gametracker_core::traits::Owned;
use gametracker_core::types::{GameId, ReviewId, UserId};

use super::rating::Rating;

/// A user's review of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The author; immutable after creation.
    #[serde(rename = "user")]
    pub user_id: UserId,
    /// The reviewed game; immutable after creation.
    #[serde(rename = "game")]
    pub game_id: GameId,
    /// Review body.
    pub text: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// When the review was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Review {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Data required to create a review. The owner always comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Clone, Validate)]
pub struct NewReview {
    /// Author.
    pub user_id: UserId,
    /// Reviewed game.
    pub game_id: GameId,
    /// Review body, already trimmed.
    #[validate(length(min = 10, message = "Review text must be at least 10 characters."))]
    pub text: String,
    /// Star rating.
    pub rating: Rating,
}

impl NewReview {
    /// Build a new review payload, trimming the text.
    pub fn new(user_id: UserId, game_id: GameId, text: &str, rating: Rating) -> Self {
        Self {
            user_id,
            game_id,
            text: text.trim().to_string(),
            rating,
        }
    }
}

/// The mutable subset of a review. Owner and game are deliberately absent.
#[derive(Debug, Clone, Default, Validate)]
pub struct ReviewChanges {
    /// New body, already trimmed.
    #[validate(length(min = 10, message = "Review text must be at least 10 characters."))]
    pub text: Option<String>,
    /// New rating.
    pub rating: Option<Rating>,
}

impl ReviewChanges {
    /// Apply the changes to a loaded review in place.
    pub fn apply_to(&self, review: &mut Review) {
        if let Some(text) = &self.text {
            review.text = text.clone();
        }
        if let Some(rating) = self.rating {
            review.rating = rating.value();
        }
    }
}

/// An edit as the client sent it, before the rating is checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewEdit {
    /// New body; blank means unchanged.
    pub text: Option<String>,
    /// New rating as raw JSON.
    pub rating: Option<serde_json::Value>,
}

impl ReviewEdit {
    /// Check the rating and trim the text.
    pub fn into_changes(self) -> Result<ReviewChanges, AppError> {
        let rating = match self.rating {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(Rating::from_json_value(&value)?),
        };
        let text = self
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(ReviewChanges { text, rating })
    }
}
