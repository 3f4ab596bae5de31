//! In-memory user store.

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use gametracker_core::error::AppError;
use gametracker_core::result::AppResult;
use gametracker_core::types::UserId;
use gametracker_entity::review::AuthorSummary;
use gametracker_entity::user::{Identity, NewUser, User, UserChanges};

use super::MemoryDatabase;
use crate::hooks::PasswordWriteHook;
use crate::store::UserStore;

const TAKEN: &str = "Username or email already in use.";

/// User accounts held in process memory.
#[derive(Debug, Clone)]
pub struct MemoryUserStore {
    db: MemoryDatabase,
    hook: PasswordWriteHook,
}

impl MemoryUserStore {
    /// Create a store over the given database.
    pub fn new(db: MemoryDatabase, hook: PasswordWriteHook) -> Self {
        Self { db, hook }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, data: NewUser) -> AppResult<User> {
        data.validate()?;
        // Hash before locking; the uniqueness check and insert happen under
        // one write guard below.
        let password_hash = self.hook.on_create(&data.password).await?;

        let mut tables = self.db.tables().write().await;
        if tables
            .users
            .values()
            .any(|u| u.username == data.username || u.email == data.email)
        {
            return Err(AppError::conflict(TAKEN));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: data.username,
            email: data.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User> {
        changes.validate()?;
        let password_hash = self.hook.on_update(&changes.password).await?;

        let mut tables = self.db.tables().write().await;
        let collides = tables.users.values().any(|u| {
            u.id != id
                && (changes.username.as_deref() == Some(u.username.as_str())
                    || changes.email.as_deref() == Some(u.email.as_str()))
        });
        if collides {
            return Err(AppError::conflict(TAKEN));
        }

        let user = tables
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("User not found."))?;
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.db.tables().read().await.users.get(&id).cloned())
    }

    async fn find_identity(&self, id: UserId) -> AppResult<Option<Identity>> {
        Ok(self
            .db
            .tables()
            .read()
            .await
            .users
            .get(&id)
            .map(User::identity))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .db
            .tables()
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<Identity>> {
        Ok(self
            .db
            .tables()
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username || u.email == email)
            .map(User::identity))
    }

    async fn find_authors(&self, ids: &[UserId]) -> AppResult<Vec<AuthorSummary>> {
        let tables = self.db.tables().read().await;
        Ok(ids
            .iter()
            .filter_map(|id| tables.users.get(id))
            .map(|u| AuthorSummary {
                id: u.id,
                username: u.username.clone(),
            })
            .collect())
    }
}
