//! # gametracker-database
//!
//! Persistence for GameTracker: the store traits the service layer is
//! written against, their PostgreSQL implementations, an in-memory
//! implementation with the same uniqueness guarantees, and the password
//! write hook shared by both credential stores.

pub mod connection;
pub mod hooks;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use hooks::PasswordWriteHook;
pub use memory::MemoryDatabase;
pub use store::{GameStore, ReviewStore, StoreHealth, Stores, UserStore};
