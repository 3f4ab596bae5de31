//! Game entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use gametracker_core::types::GameId;

use super::status::GameStatus;
use crate::review::GameSummary;

/// A game in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Game {
    /// Unique game identifier.
    pub id: GameId,
    /// Title.
    pub title: String,
    /// Genre.
    pub genre: String,
    /// Platform.
    pub platform: Option<String>,
    /// Release date.
    pub release_date: Option<NaiveDate>,
    /// Developer studio.
    pub developer: Option<String>,
    /// Publisher.
    pub publisher: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Play status.
    pub status: GameStatus,
    /// Personal score, 1 through 5.
    pub score: Option<i32>,
    /// Hours played.
    pub hours_played: f64,
    /// When the game was added.
    pub created_at: DateTime<Utc>,
    /// When the game was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Display fields attached to a user's review listing.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            title: self.title.clone(),
            platform: self.platform.clone(),
            cover_image: self.cover_image.clone(),
        }
    }
}

/// Data required to add a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewGame {
    /// Title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    /// Genre.
    #[serde(default)]
    #[validate(length(min = 1, message = "Genre is required."))]
    pub genre: String,
    /// Platform.
    pub platform: Option<String>,
    /// Release date.
    pub release_date: Option<NaiveDate>,
    /// Developer studio.
    pub developer: Option<String>,
    /// Publisher.
    pub publisher: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Play status.
    #[serde(default)]
    pub status: GameStatus,
    /// Personal score.
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5."))]
    pub score: Option<i32>,
    /// Hours played.
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Hours played cannot be negative."))]
    pub hours_played: f64,
}

/// A partial update of a game; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GameChanges {
    /// Title.
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: Option<String>,
    /// Genre.
    #[validate(length(min = 1, message = "Genre is required."))]
    pub genre: Option<String>,
    /// Platform.
    pub platform: Option<String>,
    /// Release date.
    pub release_date: Option<NaiveDate>,
    /// Developer studio.
    pub developer: Option<String>,
    /// Publisher.
    pub publisher: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Play status.
    pub status: Option<GameStatus>,
    /// Personal score.
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5."))]
    pub score: Option<i32>,
    /// Hours played.
    #[validate(range(min = 0.0, message = "Hours played cannot be negative."))]
    pub hours_played: Option<f64>,
}

impl GameChanges {
    /// Apply the changes to a loaded game in place.
    pub fn apply_to(&self, game: &mut Game) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(genre) = &self.genre {
            game.genre = genre.clone();
        }
        if self.platform.is_some() {
            game.platform = self.platform.clone();
        }
        if self.release_date.is_some() {
            game.release_date = self.release_date;
        }
        if self.developer.is_some() {
            game.developer = self.developer.clone();
        }
        if self.publisher.is_some() {
            game.publisher = self.publisher.clone();
        }
        if self.cover_image.is_some() {
            game.cover_image = self.cover_image.clone();
        }
        if let Some(status) = self.status {
            game.status = status;
        }
        if self.score.is_some() {
            game.score = self.score;
        }
        if let Some(hours) = self.hours_played {
            game.hours_played = hours;
        }
    }
}
