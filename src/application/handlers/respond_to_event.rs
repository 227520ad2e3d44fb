//! RespondToEventHandler - whole-event accept/reject.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::event::{apply, Event, EventCommand};
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::EventRepository;

/// Command accepting or rejecting an event as a whole.
#[derive(Debug, Clone)]
pub struct RespondToEventCommand {
    pub event_id: EventId,
    pub accept: bool,
}

/// Handler applying a whole-event response and persisting it.
pub struct RespondToEventHandler {
    repository: Arc<dyn EventRepository>,
}

impl RespondToEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Loads the event, applies the pure transition, persists the
    /// result, and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event doesn't exist
    /// - `StaleResponse` / `StorageError` from the repository
    pub async fn handle(&self, command: RespondToEventCommand) -> Result<Event, DomainError> {
        let event = self
            .repository
            .find_by_id(&command.event_id)
            .await?
            .ok_or_else(|| DomainError::event_not_found(command.event_id))?;

        let reducer_command = if command.accept {
            EventCommand::AcceptEvent
        } else {
            EventCommand::RejectEvent
        };
        let next = apply(&event, &reducer_command);

        // A repeated identical response leaves the snapshot unchanged;
        // there is nothing to persist.
        if next.version == event.version {
            debug!(event = %next.id, "response already recorded");
            return Ok(next);
        }

        self.repository.update(&next).await?;
        info!(event = %next.id, status = %next.overall_status, "event response recorded");
        Ok(next)
    }
}
