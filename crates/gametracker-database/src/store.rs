//! Store traits the service layer is written against.
//!
//! Every write goes through one of these traits, so the password hook,
//! schema validation and uniqueness guarantees hold regardless of which
//! backend is configured.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use gametracker_core::result::AppResult;
use gametracker_core::traits::CredentialHasher;
use gametracker_core::types::{GameId, ReviewId, UserId};
use gametracker_entity::game::{Game, GameChanges, NewGame};
use gametracker_entity::review::{AuthorSummary, GameSummary, NewReview, Review, ReviewChanges};
use gametracker_entity::user::{Identity, NewUser, User, UserChanges};

use crate::connection::DatabasePool;
use crate::hooks::PasswordWriteHook;
use crate::memory::MemoryDatabase;
use crate::repositories::{GameRepository, ReviewRepository, UserRepository};

/// Persistence of user accounts.
#[async_trait]
pub trait UserStore: Debug + Send + Sync {
    /// Insert a new user. The plaintext password is hashed before write.
    ///
    /// Fails with a conflict when the username or email is taken.
    async fn create(&self, data: NewUser) -> AppResult<User>;

    /// Apply a partial update. The password is re-hashed only when the
    /// change set marks it as modified.
    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User>;

    /// Load a full user record, credential included.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Load a user without the password hash.
    async fn find_identity(&self, id: UserId) -> AppResult<Option<Identity>>;

    /// Load a full user record by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find any user matching the username or the email.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<Identity>>;

    /// Resolve usernames for a batch of authors. Unknown ids are skipped.
    async fn find_authors(&self, ids: &[UserId]) -> AppResult<Vec<AuthorSummary>>;
}

/// Persistence of reviews.
#[async_trait]
pub trait ReviewStore: Debug + Send + Sync {
    /// Insert a review.
    ///
    /// Fails with a conflict when the author already reviewed the game,
    /// and with not-found when the game does not exist.
    async fn create(&self, data: NewReview) -> AppResult<Review>;

    /// Load a review by id.
    async fn find_by_id(&self, id: ReviewId) -> AppResult<Option<Review>>;

    /// Load the author's review of a game, if any.
    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> AppResult<Option<Review>>;

    /// All reviews of a game, newest first.
    async fn find_by_game(&self, game_id: GameId) -> AppResult<Vec<Review>>;

    /// All reviews written by a user, newest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Review>>;

    /// Apply text and rating changes.
    async fn update(&self, id: ReviewId, changes: ReviewChanges) -> AppResult<Review>;

    /// Remove a review. Returns `false` when nothing was deleted.
    async fn delete(&self, id: ReviewId) -> AppResult<bool>;
}

/// Persistence of the game library.
#[async_trait]
pub trait GameStore: Debug + Send + Sync {
    /// Insert a game.
    async fn create(&self, data: NewGame) -> AppResult<Game>;

    /// All games, newest first.
    async fn find_all(&self) -> AppResult<Vec<Game>>;

    /// Load a game by id.
    async fn find_by_id(&self, id: GameId) -> AppResult<Option<Game>>;

    /// Resolve display summaries for a batch of games. Unknown ids are skipped.
    async fn find_summaries(&self, ids: &[GameId]) -> AppResult<Vec<GameSummary>>;

    /// Apply a partial update.
    async fn update(&self, id: GameId, changes: GameChanges) -> AppResult<Game>;

    /// Remove a game and its reviews. Returns `false` when nothing was deleted.
    async fn delete(&self, id: GameId) -> AppResult<bool>;
}

/// Liveness probe for the backing store.
#[async_trait]
pub trait StoreHealth: Debug + Send + Sync {
    /// Returns `Ok(true)` when the store answers.
    async fn ping(&self) -> AppResult<bool>;
}

/// The full set of stores, shared behind trait objects.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Reviews.
    pub reviews: Arc<dyn ReviewStore>,
    /// Game library.
    pub games: Arc<dyn GameStore>,
    /// Store liveness.
    pub health: Arc<dyn StoreHealth>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(db: &DatabasePool, hasher: Arc<dyn CredentialHasher>) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(
                pool.clone(),
                PasswordWriteHook::new(hasher),
            )),
            reviews: Arc::new(ReviewRepository::new(pool.clone())),
            games: Arc::new(GameRepository::new(pool)),
            health: Arc::new(db.clone()),
        }
    }

    /// Process-local stores over a fresh [`MemoryDatabase`].
    pub fn memory(hasher: Arc<dyn CredentialHasher>) -> Self {
        MemoryDatabase::new().stores(hasher)
    }
}

#[async_trait]
impl StoreHealth for DatabasePool {
    async fn ping(&self) -> AppResult<bool> {
        self.health_check().await
    }
}
