//! User entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use gametracker_core::types::UserId;

use super::password::PasswordField;

/// A registered user, as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Drop the credential and keep the public identity.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user record loaded without its password hash.
///
/// This is what the auth gate attaches to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Identity {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
///
/// The password is plaintext here; the store hashes it on write.
#[derive(Clone, Validate)]
pub struct NewUser {
    /// Desired username.
    #[validate(length(min = 3, message = "Username must be at least 3 characters."))]
    pub username: String,
    /// Email address.
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl NewUser {
    /// Build a new-user payload, trimming the identifying fields.
    pub fn new(username: &str, email: &str, password: impl Into<String>) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A partial update of a user's own account.
#[derive(Debug, Clone, Default, Validate)]
pub struct UserChanges {
    /// New username.
    #[validate(length(min = 3, message = "Username must be at least 3 characters."))]
    pub username: Option<String>,
    /// New email address.
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,
    /// New password, if the write changes it.
    pub password: PasswordField,
}

impl UserChanges {
    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && !self.password.is_modified()
    }
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email
        .char_indices()
        .filter(|&(_, c)| c == '@')
        .any(|(at, _)| {
            let domain = &email[at + 1..];
            at > 0
                && domain
                    .char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Please enter a valid email address.".into()))
    }
}
