//! Play status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the user is with a game in their library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "game_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Currently playing.
    Playing,
    /// Finished.
    Completed,
    /// On the backlog.
    #[default]
    PlanToPlay,
    /// Abandoned.
    Dropped,
}

impl GameStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Completed => "completed",
            Self::PlanToPlay => "plan_to_play",
            Self::Dropped => "dropped",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = gametracker_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "playing" => Ok(Self::Playing),
            "completed" => Ok(Self::Completed),
            "plan_to_play" => Ok(Self::PlanToPlay),
            "dropped" => Ok(Self::Dropped),
            _ => Err(gametracker_core::AppError::validation(format!(
                "Invalid game status: '{s}'. Expected one of: playing, completed, plan_to_play, dropped"
            ))),
        }
    }
}
