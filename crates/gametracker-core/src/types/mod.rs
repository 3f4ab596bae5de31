//! Core type definitions used across the GameTracker workspace.

pub mod id;

pub use id::*;
