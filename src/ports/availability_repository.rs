//! Availability repository port.

use async_trait::async_trait;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{AvailabilityId, DomainError, UserId};

/// Repository port for weekly availability persistence.
///
/// Availability is keyed by (user, day of week): writing a slot for a
/// day the user already configured replaces that day's record.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert or replace the slot for the slot's (user, day) pair.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn upsert(&self, slot: &AvailabilitySlot) -> Result<(), DomainError>;

    /// All slots configured by a user, ordered by day of week.
    async fn find_by_user(&self, user: &UserId) -> Result<Vec<AvailabilitySlot>, DomainError>;

    /// Delete a slot.
    ///
    /// # Errors
    ///
    /// - `AvailabilityNotFound` if the slot doesn't exist
    async fn delete(&self, id: &AvailabilityId) -> Result<(), DomainError>;
}
