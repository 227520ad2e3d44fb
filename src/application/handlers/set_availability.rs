//! SetAvailabilityHandler - upsert one day's availability window.

use std::sync::Arc;

use tracing::info;

use crate::domain::availability::{AvailabilitySlot, TimeOfDay};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AvailabilityRepository;

/// Command setting a user's window for one day of the week.
#[derive(Debug, Clone)]
pub struct SetAvailabilityCommand {
    pub user_id: UserId,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// "HH:MM".
    pub start: String,
    /// "HH:MM".
    pub end: String,
    pub timezone: String,
}

/// Handler replacing the stored window for (user, day).
pub struct SetAvailabilityHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl SetAvailabilityHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    /// Validates and upserts the slot, returning the stored value.
    ///
    /// # Errors
    ///
    /// - Validation errors for bad day/times/timezone
    /// - `StorageError` from the repository
    pub async fn handle(&self, command: SetAvailabilityCommand) -> Result<AvailabilitySlot, DomainError> {
        let start = TimeOfDay::parse(&command.start)?;
        let end = TimeOfDay::parse(&command.end)?;
        let slot = AvailabilitySlot::new(
            command.user_id,
            command.day_of_week,
            start,
            end,
            command.timezone,
        )?;

        self.repository.upsert(&slot).await?;
        info!(user = %slot.user, day = slot.day_of_week, "availability updated");
        Ok(slot)
    }
}
