//! # gametracker-core
//!
//! Core crate for GameTracker. Contains configuration schemas, typed
//! identifiers, the traits shared between the auth and storage layers,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other GameTracker crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
