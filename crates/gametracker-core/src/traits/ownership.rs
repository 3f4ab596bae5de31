//! Single-owner resources.

use crate::types::UserId;

/// A resource that belongs to exactly one user.
pub trait Owned {
    /// The identity that created the resource.
    fn owner_id(&self) -> UserId;
}
