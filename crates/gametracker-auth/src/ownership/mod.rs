//! Ownership enforcement for single-owner resources.

pub mod enforcer;

pub use enforcer::OwnershipEnforcer;
