//! Password write hook.
//!
//! Both credential stores route every password write through
//! [`PasswordWriteHook`], so a plaintext password never reaches storage
//! and an unchanged password is never re-hashed.

use std::sync::Arc;

use tracing::error;

use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::result::AppResult;
use gametracker_core::traits::CredentialHasher;
use gametracker_entity::user::PasswordField;

/// Hashes plaintext passwords on the blocking pool before they are stored.
#[derive(Debug, Clone)]
pub struct PasswordWriteHook {
    hasher: Arc<dyn CredentialHasher>,
}

impl PasswordWriteHook {
    /// Create a hook around the given hasher.
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { hasher }
    }

    /// Hash the password of a user being created.
    pub async fn on_create(&self, plaintext: &str) -> AppResult<String> {
        self.hash(plaintext.to_owned()).await
    }

    /// Hash the password of a user being updated, if the update changes it.
    ///
    /// Returns `None` when the stored hash must be kept as is.
    pub async fn on_update(&self, password: &PasswordField) -> AppResult<Option<String>> {
        match password.plaintext() {
            Some(plaintext) => self.hash(plaintext.to_owned()).await.map(Some),
            None => Ok(None),
        }
    }

    async fn hash(&self, plaintext: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| {
                error!(error = %e, "Password hashing task failed");
                AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e)
            })?
    }
}
