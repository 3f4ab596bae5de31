//! Ownership checks, evaluated before any mutation of an owned resource.

use gametracker_core::error::AppError;
use gametracker_core::traits::Owned;
use gametracker_core::types::UserId;

/// Denial message returned to non-owners.
const NOT_OWNER: &str = "Not authorized to modify this review.";

/// Confirms that the caller owns the resource it is about to modify.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipEnforcer;

impl OwnershipEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(())` when `caller` owns `resource`, otherwise an
    /// authorization error.
    pub fn require_owner<R: Owned>(&self, caller: UserId, resource: &R) -> Result<(), AppError> {
        if self.is_owner(caller, resource) {
            Ok(())
        } else {
            Err(AppError::authorization(NOT_OWNER))
        }
    }

    /// Returns whether `caller` owns `resource`.
    pub fn is_owner<R: Owned>(&self, caller: UserId, resource: &R) -> bool {
        resource.owner_id() == caller
    }
}
