//! Read projections that attach display fields of related records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gametracker_core::types::{GameId, ReviewId, UserId};

use super::model::Review;

/// Minimal author display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Author id.
    pub id: UserId,
    /// Author username.
    pub username: String,
}

/// Minimal game display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Game id.
    pub id: GameId,
    /// Game title.
    pub title: String,
    /// Platform, if known.
    pub platform: Option<String>,
    /// Cover image URL, if any.
    pub cover_image: Option<String>,
}

/// A review as listed on a game's page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewWithAuthor {
    /// Review id.
    pub id: ReviewId,
    /// Author, `None` if the account no longer exists.
    pub user: Option<AuthorSummary>,
    /// Reviewed game id.
    pub game: GameId,
    /// Review body.
    pub text: String,
    /// Star rating.
    pub rating: i32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
}

impl ReviewWithAuthor {
    /// Combine a raw review with its author's display fields.
    pub fn new(review: Review, user: Option<AuthorSummary>) -> Self {
        Self {
            id: review.id,
            user,
            game: review.game_id,
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// A review as listed in its author's own collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewWithGame {
    /// Review id.
    pub id: ReviewId,
    /// Author id.
    pub user: UserId,
    /// Game display fields, `None` if the game no longer exists.
    pub game: Option<GameSummary>,
    /// Review body.
    pub text: String,
    /// Star rating.
    pub rating: i32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
}

impl ReviewWithGame {
    /// Combine a raw review with its game's display fields.
    pub fn new(review: Review, game: Option<GameSummary>) -> Self {
        Self {
            id: review.id,
            user: review.user_id,
            game,
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
