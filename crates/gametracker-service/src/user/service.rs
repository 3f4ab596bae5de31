//! Registration, login and self-service profile operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use gametracker_auth::jwt::JwtEncoder;
use gametracker_auth::password::PasswordValidator;
use gametracker_core::error::{AppError, ErrorKind};
use gametracker_core::result::AppResult;
use gametracker_core::traits::CredentialHasher;
use gametracker_database::store::UserStore;
use gametracker_entity::user::{Identity, NewUser, PasswordField, UserChanges};

const MISSING_REGISTRATION_FIELDS: &str = "Please fill in all fields.";
const MISSING_LOGIN_FIELDS: &str = "Please enter your email and password.";
const INVALID_CREDENTIALS: &str = "Invalid credentials.";
const ACCOUNT_TAKEN: &str = "Username or email already in use.";
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// A freshly authenticated identity together with its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: Identity,
    /// Signed bearer token.
    pub token: String,
}

/// Fields a user may change on their own account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Handles account creation, login and profile maintenance.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher, used here only for verification.
    hasher: Arc<dyn CredentialHasher>,
    /// Password policy.
    validator: PasswordValidator,
    /// Token issuer.
    encoder: JwtEncoder,
    /// Hash checked when the email is unknown, so both login failures
    /// cost one verification.
    decoy_hash: Arc<OnceCell<String>>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        validator: PasswordValidator,
        encoder: JwtEncoder,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Registers a new account and signs the caller in.
    ///
    /// Every failure, a taken username or email included, is a validation
    /// error.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<AuthSession> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_REGISTRATION_FIELDS));
        }

        let data = NewUser::new(username, email, password);
        if self
            .users
            .find_by_username_or_email(&data.username, &data.email)
            .await?
            .is_some()
        {
            return Err(AppError::validation(ACCOUNT_TAKEN));
        }
        self.validator.validate(password)?;

        // A concurrent registration can still win the race past the check
        // above; the store reports it as a conflict.
        let user = self.users.create(data).await.map_err(|e| {
            if e.is(ErrorKind::Conflict) {
                AppError::validation(ACCOUNT_TAKEN)
            } else {
                e
            }
        })?;

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthSession {
            user: user.identity(),
            token,
        })
    }

    /// Authenticates by email and password.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_LOGIN_FIELDS));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            let decoy = self.decoy_hash().await?;
            self.verify(password, decoy).await?;
            warn!("Login attempt for unknown email");
            return Err(AppError::validation(INVALID_CREDENTIALS));
        };

        if !self.verify(password, &user.password_hash).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::validation(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            user: user.identity(),
            token,
        })
    }

    /// Updates the caller's own account.
    ///
    /// The stored password hash is only replaced when a new password is
    /// supplied.
    pub async fn update_profile(
        &self,
        caller: &Identity,
        update: ProfileUpdate,
    ) -> AppResult<Identity> {
        if let Some(password) = &update.password {
            self.validator.validate(password)?;
        }

        let changes = UserChanges {
            username: update.username.map(|u| u.trim().to_string()),
            email: update.email.map(|e| e.trim().to_string()),
            password: PasswordField::from(update.password),
        };
        if changes.is_empty() {
            return Ok(caller.clone());
        }

        let password_changed = changes.password.is_modified();
        let user = self.users.update(caller.id, changes).await?;
        info!(user_id = %user.id, password_changed, "Profile updated");

        Ok(user.identity())
    }

    async fn decoy_hash(&self) -> AppResult<&str> {
        let hash = self
            .decoy_hash
            .get_or_try_init(|| async {
                let hasher = Arc::clone(&self.hasher);
                tokio::task::spawn_blocking(move || hasher.hash(DECOY_PASSWORD))
                    .await
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Internal,
                            "Password hashing task failed",
                            e,
                        )
                    })?
            })
            .await?;
        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let (password, hash) = (password.to_owned(), hash.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
            })?
    }
}
