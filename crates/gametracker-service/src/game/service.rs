//! Game library CRUD.

use std::sync::Arc;

use tracing::info;

use gametracker_core::error::AppError;
use gametracker_core::result::AppResult;
use gametracker_core::types::GameId;
use gametracker_database::store::GameStore;
use gametracker_entity::game::{Game, GameChanges, NewGame};

const GAME_NOT_FOUND: &str = "Game not found.";

/// Handles the shared game library.
#[derive(Debug, Clone)]
pub struct GameService {
    games: Arc<dyn GameStore>,
}

impl GameService {
    /// Creates a new game service.
    pub fn new(games: Arc<dyn GameStore>) -> Self {
        Self { games }
    }

    /// All games, newest first.
    pub async fn list(&self) -> AppResult<Vec<Game>> {
        self.games.find_all().await
    }

    /// A single game.
    pub async fn get(&self, id: GameId) -> AppResult<Game> {
        self.games
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(GAME_NOT_FOUND))
    }

    /// Adds a game to the library.
    pub async fn create(&self, mut data: NewGame) -> AppResult<Game> {
        data.title = data.title.trim().to_string();
        data.genre = data.genre.trim().to_string();

        let game = self.games.create(data).await?;
        info!(game_id = %game.id, title = %game.title, "Game created");
        Ok(game)
    }

    /// Applies a partial update.
    pub async fn update(&self, id: GameId, mut changes: GameChanges) -> AppResult<Game> {
        changes.title = changes.title.map(|t| t.trim().to_string());
        changes.genre = changes.genre.map(|g| g.trim().to_string());

        let game = self.games.update(id, changes).await?;
        info!(game_id = %id, "Game updated");
        Ok(game)
    }

    /// Removes a game together with its reviews.
    pub async fn delete(&self, id: GameId) -> AppResult<()> {
        if !self.games.delete(id).await? {
            return Err(AppError::not_found(GAME_NOT_FOUND));
        }
        info!(game_id = %id, "Game deleted");
        Ok(())
    }
}
