//! Review repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use validator::Validate;

use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::result::AppResult;
use gametracker_core::types::{GameId, ReviewId, UserId};
use gametracker_entity::review::{NewReview, Review, ReviewChanges};

use super::violated_constraint;
use crate::store::ReviewStore;

/// Repository for reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn create(&self, data: NewReview) -> AppResult<Review> {
        data.validate()?;

        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, user_id, game_id, text, rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(ReviewId::new())
        .bind(data.user_id)
        .bind(data.game_id)
        .bind(&data.text)
        .bind(data.rating.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("reviews_user_id_game_id_key") => {
                AppError::conflict("You have already reviewed this game.")
            }
            Some("reviews_game_id_fkey") => AppError::not_found("Game not found."),
            Some("reviews_user_id_fkey") => AppError::not_found("User not found."),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }

    async fn find_by_id(&self, id: ReviewId) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE user_id = $1 AND game_id = $2")
            .bind(user_id)
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    async fn find_by_game(&self, game_id: GameId) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE game_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list game reviews", e))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user reviews", e))
    }

    async fn update(&self, id: ReviewId, changes: ReviewChanges) -> AppResult<Review> {
        changes.validate()?;

        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET \
                text = COALESCE($2, text), \
                rating = COALESCE($3, rating), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(changes.text.as_deref())
        .bind(changes.rating.map(|r| r.value()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found("Review not found."))
    }

    async fn delete(&self, id: ReviewId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete review", e))?;
        Ok(result.rows_affected() > 0)
    }
}
