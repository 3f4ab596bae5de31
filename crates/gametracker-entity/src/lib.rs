//! # gametracker-entity
//!
//! Domain entity models for GameTracker. Every struct in this crate
//! represents a database table row, a write payload for one, or a read
//! projection. Row types derive `sqlx::FromRow`; write payloads derive
//! `validator::Validate` so the store can check them before persisting.

pub mod game;
pub mod review;
pub mod user;
