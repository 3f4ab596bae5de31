//! Game repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use validator::Validate;

use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::result::AppResult;
use gametracker_core::types::GameId;
use gametracker_entity::game::{Game, GameChanges, NewGame};
use gametracker_entity::review::GameSummary;

use crate::store::GameStore;

/// Repository for the game library.
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    /// Create a new game repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for GameRepository {
    async fn create(&self, data: NewGame) -> AppResult<Game> {
        data.validate()?;

        sqlx::query_as::<_, Game>(
            "INSERT INTO games \
                (id, title, genre, platform, release_date, developer, publisher, \
                 cover_image, status, score, hours_played) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(GameId::new())
        .bind(&data.title)
        .bind(&data.genre)
        .bind(&data.platform)
        .bind(data.release_date)
        .bind(&data.developer)
        .bind(&data.publisher)
        .bind(&data.cover_image)
        .bind(data.status)
        .bind(data.score)
        .bind(data.hours_played)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create game", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list games", e))
    }

    async fn find_by_id(&self, id: GameId) -> AppResult<Option<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find game", e))
    }

    async fn find_summaries(&self, ids: &[GameId]) -> AppResult<Vec<GameSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, (GameId, String, Option<String>, Option<String>)>(
            "SELECT id, title, platform, cover_image FROM games WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load games", e))?;

        Ok(rows
            .into_iter()
            .map(|(id, title, platform, cover_image)| GameSummary {
                id,
                title,
                platform,
                cover_image,
            })
            .collect())
    }

    async fn update(&self, id: GameId, changes: GameChanges) -> AppResult<Game> {
        changes.validate()?;

        sqlx::query_as::<_, Game>(
            "UPDATE games SET \
                title = COALESCE($2, title), \
                genre = COALESCE($3, genre), \
                platform = COALESCE($4, platform), \
                release_date = COALESCE($5, release_date), \
                developer = COALESCE($6, developer), \
                publisher = COALESCE($7, publisher), \
                cover_image = COALESCE($8, cover_image), \
                status = COALESCE($9, status), \
                score = COALESCE($10, score), \
                hours_played = COALESCE($11, hours_played), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.genre.as_deref())
        .bind(changes.platform.as_deref())
        .bind(changes.release_date)
        .bind(changes.developer.as_deref())
        .bind(changes.publisher.as_deref())
        .bind(changes.cover_image.as_deref())
        .bind(changes.status)
        .bind(changes.score)
        .bind(changes.hours_played)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update game", e))?
        .ok_or_else(|| AppError::not_found("Game not found."))
    }

    async fn delete(&self, id: GameId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete game", e))?;
        Ok(result.rows_affected() > 0)
    }
}
