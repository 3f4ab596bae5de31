//! Core traits defined in `gametracker-core` and implemented by other crates.

pub mod credential;
pub mod ownership;

pub use credential::CredentialHasher;
pub use ownership::Owned;
