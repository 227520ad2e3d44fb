//! RespondToParticipantHandler - single-participant accept/reject.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::event::{
    apply_with, Event, EventCommand, IdentityMatcher, ParticipantIdentity, ResponseStatus,
};
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::EventRepository;

/// Command recording one invitee's response to an event.
#[derive(Debug, Clone)]
pub struct RespondToParticipantCommand {
    pub event_id: EventId,
    pub identity: String,
    pub accept: bool,
}

/// Handler applying one participant's response and persisting it.
///
/// The identity string is matched fuzzily against the stored list; an
/// unmatched identity is synthesized as a new participant rather than
/// dropped.
pub struct RespondToParticipantHandler {
    repository: Arc<dyn EventRepository>,
    matcher: IdentityMatcher,
}

impl RespondToParticipantHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self::with_matcher(repository, IdentityMatcher::default())
    }

    pub fn with_matcher(repository: Arc<dyn EventRepository>, matcher: IdentityMatcher) -> Self {
        Self { repository, matcher }
    }

    /// Loads the event, applies the pure transition, persists the
    /// result, and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the identity string is blank
    /// - `EventNotFound` if the event doesn't exist
    /// - `StaleResponse` / `StorageError` from the repository
    pub async fn handle(&self, command: RespondToParticipantCommand) -> Result<Event, DomainError> {
        let identity = ParticipantIdentity::new(command.identity)?;
        let event = self
            .repository
            .find_by_id(&command.event_id)
            .await?
            .ok_or_else(|| DomainError::event_not_found(command.event_id))?;

        let status = if command.accept {
            ResponseStatus::Accepted
        } else {
            ResponseStatus::Rejected
        };
        let reducer_command = EventCommand::SetParticipant {
            identity: identity.clone(),
            status,
        };
        let next = apply_with(&event, &reducer_command, &self.matcher);

        // A repeated identical response leaves the snapshot unchanged;
        // there is nothing to persist.
        if next.version == event.version {
            debug!(event = %next.id, identity = %identity, "response already recorded");
            return Ok(next);
        }

        self.repository.update(&next).await?;
        info!(
            event = %next.id,
            identity = %identity,
            status = %status,
            overall = %next.overall_status,
            "participant response recorded"
        );
        Ok(next)
    }
}
