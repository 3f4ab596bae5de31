//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use validator::Validate;

use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::result::AppResult;
use gametracker_core::types::UserId;
use gametracker_entity::review::AuthorSummary;
use gametracker_entity::user::{Identity, NewUser, User, UserChanges};

use super::violated_constraint;
use crate::hooks::PasswordWriteHook;
use crate::store::UserStore;

const SELECT_IDENTITY: &str = "SELECT id, username, email, created_at, updated_at FROM users";

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
    hook: PasswordWriteHook,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool, hook: PasswordWriteHook) -> Self {
        Self { pool, hook }
    }
}

/// Translate a failed user write, surfacing uniqueness violations.
fn write_error(err: sqlx::Error, context: &'static str) -> AppError {
    match violated_constraint(&err) {
        Some("users_username_key") | Some("users_email_key") => {
            AppError::conflict("Username or email already in use.")
        }
        _ => AppError::with_source(ErrorKind::Database, context, err),
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, data: NewUser) -> AppResult<User> {
        data.validate()?;
        let password_hash = self.hook.on_create(&data.password).await?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(UserId::new())
        .bind(&data.username)
        .bind(&data.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to create user"))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<User> {
        changes.validate()?;
        let password_hash = self.hook.on_update(&changes.password).await?;

        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                username = COALESCE($2, username), \
                email = COALESCE($3, email), \
                password_hash = COALESCE($4, password_hash), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(changes.username.as_deref())
        .bind(changes.email.as_deref())
        .bind(password_hash.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found("User not found."))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_identity(&self, id: UserId) -> AppResult<Option<Identity>> {
        let sql = format!("{SELECT_IDENTITY} WHERE id = $1");
        sqlx::query_as::<_, Identity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user identity", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<Identity>> {
        let sql = format!("{SELECT_IDENTITY} WHERE username = $1 OR email = $2 LIMIT 1");
        sqlx::query_as::<_, Identity>(&sql)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up user", e))
    }

    async fn find_authors(&self, ids: &[UserId]) -> AppResult<Vec<AuthorSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, (UserId, String)>(
            "SELECT id, username FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load authors", e))?;

        Ok(rows
            .into_iter()
            .map(|(id, username)| AuthorSummary { id, username })
            .collect())
    }
}
