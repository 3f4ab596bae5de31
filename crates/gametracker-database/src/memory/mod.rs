//! In-memory implementations of the store traits.
//!
//! All three stores share one [`MemoryDatabase`] so that foreign-key
//! checks and cascades behave like the PostgreSQL schema. Each write
//! takes the single write lock, which makes check-then-insert atomic.

pub mod game;
pub mod review;
pub mod user;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gametracker_core::result::AppResult;
use gametracker_core::traits::CredentialHasher;
use gametracker_core::types::UserId;
use gametracker_entity::game::Game;
use gametracker_entity::review::Review;
use gametracker_entity::user::User;

pub use game::MemoryGameStore;
pub use review::MemoryReviewStore;
pub use user::MemoryUserStore;

use crate::hooks::PasswordWriteHook;
use crate::store::{StoreHealth, Stores};

/// Rows held by the in-memory backend.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: HashMap<UserId, User>,
    /// Insertion order is kept so ties on `created_at` list newest first.
    pub(crate) reviews: Vec<Review>,
    pub(crate) games: Vec<Game>,
}

/// Process-local database shared by the in-memory stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full store set over this database.
    pub fn stores(&self, hasher: Arc<dyn CredentialHasher>) -> Stores {
        Stores {
            users: Arc::new(MemoryUserStore::new(
                self.clone(),
                PasswordWriteHook::new(hasher),
            )),
            reviews: Arc::new(MemoryReviewStore::new(self.clone())),
            games: Arc::new(MemoryGameStore::new(self.clone())),
            health: Arc::new(self.clone()),
        }
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.tables
    }
}

#[async_trait]
impl StoreHealth for MemoryDatabase {
    async fn ping(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Newest first; among equal timestamps the later insert wins.
pub(crate) fn newest_first<T: Clone>(
    rows: impl DoubleEndedIterator<Item = T>,
    created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>,
) -> Vec<T> {
    let mut rows: Vec<T> = rows.rev().collect();
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}
