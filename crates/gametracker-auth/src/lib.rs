//! # gametracker-auth
//!
//! Authentication building blocks for GameTracker.
//!
//! ## Modules
//!
//! - `jwt` - signed bearer token issuance and verification
//! - `password` - Argon2id password hashing and the length policy
//! - `ownership` - the single-owner check guarding review writes

pub mod jwt;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use ownership::OwnershipEnforcer;
pub use password::{PasswordHasher, PasswordValidator};
