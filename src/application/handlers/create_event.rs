//! CreateEventHandler - Command handler for creating an event.

use std::sync::Arc;

use tracing::info;

use crate::domain::event::{Event, MeetingSchedule, ParticipantIdentity};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EventRepository;

/// Command to create an event with invited emails.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub host: UserId,
    pub title: String,
    pub schedule: MeetingSchedule,
    pub invited: Vec<String>,
}

/// Handler for the event-creation flow.
pub struct CreateEventHandler {
    repository: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Creates the event with one Pending participant per invited email
    /// and persists it.
    ///
    /// # Errors
    ///
    /// - Validation errors for a blank title, empty identities, or
    ///   duplicate invitees
    /// - `StorageError` from the repository
    pub async fn handle(&self, command: CreateEventCommand) -> Result<Event, DomainError> {
        let mut invited = Vec::with_capacity(command.invited.len());
        for raw in command.invited {
            invited.push(ParticipantIdentity::new(raw)?);
        }

        let event = Event::create(command.host, command.title, command.schedule, invited)?;
        self.repository.save(&event).await?;
        info!(event = %event.id, invitees = event.participants.len(), "event created");
        Ok(event)
    }
}
