//! Password policy enforcement for new passwords.

use gametracker_core::config::AuthConfig;
use gametracker_core::error::AppError;

/// Upper bound on accepted password length, in characters.
const MAX_LENGTH: usize = 128;

/// Validates new passwords against the configured length policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length, in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Returns the configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Validates a password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters.",
                self.min_length
            )));
        }
        if length > MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_LENGTH} characters."
            )));
        }
        Ok(())
    }
}
