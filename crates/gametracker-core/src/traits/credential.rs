//! One-way credential hashing seam.
//!
//! The storage layer hashes passwords on its write path but must not
//! depend on the auth crate, so it receives an implementation of this
//! trait at construction time.

use std::fmt::Debug;

use crate::result::AppResult;

/// Salted, one-way password hashing.
pub trait CredentialHasher: Debug + Send + Sync + 'static {
    /// Hash a plaintext password into a self-describing digest string.
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored digest.
    ///
    /// Returns `Ok(false)` on mismatch; an error only when the stored
    /// digest cannot be parsed.
    fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool>;
}
