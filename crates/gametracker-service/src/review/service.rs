//! Review lifecycle: create, list, edit and delete, with ownership checks
//! on every mutation.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::info;

use gametracker_auth::ownership::OwnershipEnforcer;
use gametracker_core::error::AppError;
use gametracker_core::result::AppResult;
use gametracker_core::types::{GameId, ReviewId, UserId};
use gametracker_database::store::{GameStore, ReviewStore, UserStore};
use gametracker_entity::review::{
    NewReview, Rating, Review, ReviewEdit, ReviewWithAuthor, ReviewWithGame,
};

/// Orchestrates review persistence and enrichment.
#[derive(Debug, Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    games: Arc<dyn GameStore>,
    users: Arc<dyn UserStore>,
    ownership: OwnershipEnforcer,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        games: Arc<dyn GameStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            reviews,
            games,
            users,
            ownership: OwnershipEnforcer::new(),
        }
    }

    /// Writes the caller's review of a game.
    ///
    /// The owner is always the caller. A second review of the same game is
    /// a conflict, whether caught here or by the store's unique index.
    pub async fn create(
        &self,
        caller: UserId,
        game_id: GameId,
        text: &str,
        rating: Rating,
    ) -> AppResult<Review> {
        if self.games.find_by_id(game_id).await?.is_none() {
            return Err(AppError::not_found("Game not found."));
        }
        if self
            .reviews
            .find_by_user_and_game(caller, game_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("You have already reviewed this game."));
        }

        let review = self
            .reviews
            .create(NewReview::new(caller, game_id, text, rating))
            .await?;

        info!(review_id = %review.id, user_id = %caller, game_id = %game_id, "Review created");
        Ok(review)
    }

    /// All reviews of a game, newest first, each with its author's name.
    pub async fn list_for_game(&self, game_id: GameId) -> AppResult<Vec<ReviewWithAuthor>> {
        let reviews = self.reviews.find_by_game(game_id).await?;
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: BTreeSet<UserId> = reviews.iter().map(|r| r.user_id).collect();
        let ids: Vec<UserId> = author_ids.into_iter().collect();
        let authors: HashMap<UserId, _> = self
            .users
            .find_authors(&ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|r| {
                let author = authors.get(&r.user_id).cloned();
                ReviewWithAuthor::new(r, author)
            })
            .collect())
    }

    /// The caller's reviews, newest first, each with the game's display fields.
    pub async fn list_own(&self, caller: UserId) -> AppResult<Vec<ReviewWithGame>> {
        let reviews = self.reviews.find_by_user(caller).await?;
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<GameId> = reviews.iter().map(|r| r.game_id).collect();
        let games: HashMap<GameId, _> = self
            .games
            .find_summaries(&ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|r| {
                let game = games.get(&r.game_id).cloned();
                ReviewWithGame::new(r, game)
            })
            .collect())
    }

    /// Edits the text and rating of one of the caller's reviews.
    ///
    /// The review is loaded and its owner checked before the edit itself is
    /// validated.
    pub async fn update(
        &self,
        caller: UserId,
        id: ReviewId,
        edit: ReviewEdit,
    ) -> AppResult<Review> {
        let review = self.load(id).await?;
        self.ownership.require_owner(caller, &review)?;

        let changes = edit.into_changes()?;
        let updated = self.reviews.update(id, changes).await?;

        info!(review_id = %id, user_id = %caller, "Review updated");
        Ok(updated)
    }

    /// Deletes one of the caller's reviews.
    pub async fn delete(&self, caller: UserId, id: ReviewId) -> AppResult<()> {
        let review = self.load(id).await?;
        self.ownership.require_owner(caller, &review)?;

        if !self.reviews.delete(id).await? {
            return Err(AppError::not_found("Review not found."));
        }

        info!(review_id = %id, user_id = %caller, "Review deleted");
        Ok(())
    }

    async fn load(&self, id: ReviewId) -> AppResult<Review> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found."))
    }
}
