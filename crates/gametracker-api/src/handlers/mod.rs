//! HTTP handlers, grouped by resource.

pub mod game;
pub mod health;
pub mod review;
pub mod user;
