//! # gametracker-service
//!
//! Business logic service layer for GameTracker. Each service
//! orchestrates the stores and the auth primitives to implement one
//! group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod game;
pub mod review;
pub mod user;

pub use game::GameService;
pub use review::ReviewService;
pub use user::{AuthSession, ProfileUpdate, UserService};
