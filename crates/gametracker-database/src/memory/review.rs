//! In-memory review store.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use gametracker_core::error::AppError;
use gametracker_core::result::AppResult;
use gametracker_core::types::{GameId, ReviewId, UserId};
use gametracker_entity::review::{NewReview, Review, ReviewChanges};

use super::{MemoryDatabase, newest_first};
use crate::store::ReviewStore;

/// Reviews held in process memory.
#[derive(Debug, Clone)]
pub struct MemoryReviewStore {
    db: MemoryDatabase,
}

impl MemoryReviewStore {
    /// Create a store over the given database.
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn create(&self, data: NewReview) -> AppResult<Review> {
        data.validate()?;

        let mut tables = self.db.tables().write().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::not_found("User not found."));
        }
        if !tables.games.iter().any(|g| g.id == data.game_id) {
            return Err(AppError::not_found("Game not found."));
        }
        if tables
            .reviews
            .iter()
            .any(|r| r.user_id == data.user_id && r.game_id == data.game_id)
        {
            return Err(AppError::conflict("You have already reviewed this game."));
        }

        let now = Utc::now();
        let review = Review {
            id: ReviewId::new(),
            user_id: data.user_id,
            game_id: data.game_id,
            text: data.text,
            rating: data.rating.value(),
            created_at: now,
            updated_at: now,
        };
        tables.reviews.push(review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: ReviewId) -> AppResult<Option<Review>> {
        let tables = self.db.tables().read().await;
        Ok(tables.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> AppResult<Option<Review>> {
        let tables = self.db.tables().read().await;
        Ok(tables
            .reviews
            .iter()
            .find(|r| r.user_id == user_id && r.game_id == game_id)
            .cloned())
    }

    async fn find_by_game(&self, game_id: GameId) -> AppResult<Vec<Review>> {
        let tables = self.db.tables().read().await;
        let rows = tables.reviews.iter().filter(|r| r.game_id == game_id).cloned();
        Ok(newest_first(rows, |r| r.created_at))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Review>> {
        let tables = self.db.tables().read().await;
        let rows = tables.reviews.iter().filter(|r| r.user_id == user_id).cloned();
        Ok(newest_first(rows, |r| r.created_at))
    }

    async fn update(&self, id: ReviewId, changes: ReviewChanges) -> AppResult<Review> {
        changes.validate()?;

        let mut tables = self.db.tables().write().await;
        let review = tables
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Review not found."))?;
        changes.apply_to(review);
        review.updated_at = Utc::now();
        Ok(review.clone())
    }

    async fn delete(&self, id: ReviewId) -> AppResult<bool> {
        let mut tables = self.db.tables().write().await;
        let before = tables.reviews.len();
        tables.reviews.retain(|r| r.id != id);
        Ok(tables.reviews.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gametracker_core::ErrorKind;
    use gametracker_core::traits::CredentialHasher;
    use gametracker_entity::game::NewGame;
    use gametracker_entity::review::Rating;
    use gametracker_entity::user::NewUser;

    use crate::store::Stores;

    #[derive(Debug)]
    struct PlainHasher;

    impl CredentialHasher for PlainHasher {
        fn hash(&self, plaintext: &str) -> AppResult<String> {
            Ok(plaintext.to_string())
        }

        fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
            Ok(plaintext == hash)
        }
    }

    async fn seeded() -> (Stores, UserId, GameId) {
        let stores = MemoryDatabase::new().stores(Arc::new(PlainHasher));
        let user = stores
            .users
            .create(NewUser::new("ann", "ann@example.com", "secret1"))
            .await
            .unwrap();
        let game = stores
            .games
            .create(NewGame {
                title: "Celeste".into(),
                genre: "Platformer".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        (stores, user.id, game.id)
    }

    fn rating(value: i64) -> Rating {
        Rating::try_from(value).unwrap()
    }

    #[tokio::test]
    async fn test_second_review_of_same_game_conflicts() {
        let (stores, user, game) = seeded().await;
        stores
            .reviews
            .create(NewReview::new(user, game, "Tight controls, great music.", rating(5)))
            .await
            .unwrap();

        let err = stores
            .reviews
            .create(NewReview::new(user, game, "Changed my mind about it.", rating(2)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(stores.reviews.find_by_game(game).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_leave_one_review() {
        let (stores, user, game) = seeded().await;

        let attempts = (0..8).map(|i| {
            let reviews = Arc::clone(&stores.reviews);
            async move {
                reviews
                    .create(NewReview::new(
                        user,
                        game,
                        &format!("Concurrent review number {i}"),
                        rating(4),
                    ))
                    .await
            }
        });
        let results = futures::future::join_all(attempts).await;

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .filter_map(|r| r.as_ref().err())
                .all(|e| e.kind == ErrorKind::Conflict)
        );
    }

    #[tokio::test]
    async fn test_review_requires_existing_game() {
        let (stores, user, _) = seeded().await;
        let err = stores
            .reviews
            .create(NewReview::new(user, GameId::new(), "A game nobody has heard of.", rating(3)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let (stores, user, game) = seeded().await;
        let other = stores
            .games
            .create(NewGame {
                title: "Hades".into(),
                genre: "Roguelike".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let first = stores
            .reviews
            .create(NewReview::new(user, game, "First review I ever wrote.", rating(4)))
            .await
            .unwrap();
        let second = stores
            .reviews
            .create(NewReview::new(user, other.id, "Second review, even better.", rating(5)))
            .await
            .unwrap();

        let mine = stores.reviews.find_by_user(user).await.unwrap();
        assert_eq!(
            mine.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
    }

    #[tokio::test]
    async fn test_deleting_game_cascades_to_reviews() {
        let (stores, user, game) = seeded().await;
        let review = stores
            .reviews
            .create(NewReview::new(user, game, "Short lived review text.", rating(3)))
            .await
            .unwrap();

        assert!(stores.games.delete(game).await.unwrap());
        assert!(stores.reviews.find_by_id(review.id).await.unwrap().is_none());
    }
}
