//! In-memory game store.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use gametracker_core::error::AppError;
use gametracker_core::result::AppResult;
use gametracker_core::types::GameId;
use gametracker_entity::game::{Game, GameChanges, NewGame};
use gametracker_entity::review::GameSummary;

use super::{MemoryDatabase, newest_first};
use crate::store::GameStore;

/// Game library held in process memory.
#[derive(Debug, Clone)]
pub struct MemoryGameStore {
    db: MemoryDatabase,
}

impl MemoryGameStore {
    /// Create a store over the given database.
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, data: NewGame) -> AppResult<Game> {
        data.validate()?;

        let now = Utc::now();
        let game = Game {
            id: GameId::new(),
            title: data.title,
            genre: data.genre,
            platform: data.platform,
            release_date: data.release_date,
            developer: data.developer,
            publisher: data.publisher,
            cover_image: data.cover_image,
            status: data.status,
            score: data.score,
            hours_played: data.hours_played,
            created_at: now,
            updated_at: now,
        };
        self.db.tables().write().await.games.push(game.clone());
        Ok(game)
    }

    async fn find_all(&self) -> AppResult<Vec<Game>> {
        let tables = self.db.tables().read().await;
        Ok(newest_first(tables.games.iter().cloned(), |g| g.created_at))
    }

    async fn find_by_id(&self, id: GameId) -> AppResult<Option<Game>> {
        let tables = self.db.tables().read().await;
        Ok(tables.games.iter().find(|g| g.id == id).cloned())
    }

    async fn find_summaries(&self, ids: &[GameId]) -> AppResult<Vec<GameSummary>> {
        let tables = self.db.tables().read().await;
        Ok(tables
            .games
            .iter()
            .filter(|g| ids.contains(&g.id))
            .map(Game::summary)
            .collect())
    }

    async fn update(&self, id: GameId, changes: GameChanges) -> AppResult<Game> {
        changes.validate()?;

        let mut tables = self.db.tables().write().await;
        let game = tables
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found("Game not found."))?;
        changes.apply_to(game);
        game.updated_at = Utc::now();
        Ok(game.clone())
    }

    async fn delete(&self, id: GameId) -> AppResult<bool> {
        let mut tables = self.db.tables().write().await;
        let before = tables.games.len();
        tables.games.retain(|g| g.id != id);
        if tables.games.len() == before {
            return Ok(false);
        }
        tables.reviews.retain(|r| r.game_id != id);
        Ok(true)
    }
}
