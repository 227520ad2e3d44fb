//! Event aggregate entity.
//!
//! An Event is a schedulable meeting with invited participants. It is
//! created by the event-creation flow and mutated only through the pure
//! [`apply`](super::apply) function in response to accept/reject
//! commands.
//!
//! # Invariants
//!
//! - Participant identities are unique after normalization.
//! - `overall_status` is Rejected only if every participant is Rejected
//!   or an explicit whole-event reject was applied.
//! - Partial acceptance does not resolve the event: individual
//!   participants may be Accepted while `overall_status` stays Pending.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, UserId, ValidationError};

use super::{
    matches, MeetingSchedule, Participant, ParticipantIdentity, ResponseStatus,
};

/// A schedulable meeting with invited participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for this event.
    pub id: EventId,

    /// Event title as shown on the dashboard.
    pub title: String,

    /// User who created the event.
    pub host: UserId,

    /// Free-text scheduling metadata.
    pub schedule: MeetingSchedule,

    /// Whole-event status, distinct from any single participant's.
    pub overall_status: ResponseStatus,

    /// Invitees and their responses.
    pub participants: Vec<Participant>,

    /// Monotonic counter bumped on every applied command, used to
    /// detect stale gateway responses.
    pub version: u64,

    /// When the event was created.
    pub created_at: Timestamp,

    /// When the event was last changed.
    pub updated_at: Timestamp,
}

impl Event {
    /// Creates a new event with one Pending participant per invited
    /// email.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `InvalidFormat` if two invited emails normalize to the same
    ///   identity
    pub fn create(
        host: UserId,
        title: impl Into<String>,
        schedule: MeetingSchedule,
        invited: Vec<ParticipantIdentity>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let mut participants: Vec<Participant> = Vec::with_capacity(invited.len());
        for identity in invited {
            if participants.iter().any(|p| matches(&p.identity, &identity)) {
                return Err(ValidationError::invalid_format(
                    "participants",
                    format!("duplicate invitee {}", identity),
                ));
            }
            participants.push(Participant::invited(identity));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: EventId::new(),
            title,
            host,
            schedule,
            overall_status: ResponseStatus::Pending,
            participants,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// The resolved point in time this event is scheduled for, if the
    /// free-text schedule parses.
    pub fn scheduled_at(&self) -> Option<Timestamp> {
        self.schedule.resolve()
    }

    /// Returns true if at least one participant has accepted.
    pub fn has_accepted_participant(&self) -> bool {
        self.participants.iter().any(|p| p.status.is_accepted())
    }

    /// Returns true if the participant list is non-empty and every
    /// participant has rejected.
    pub fn all_participants_rejected(&self) -> bool {
        !self.participants.is_empty()
            && self.participants.iter().all(|p| p.status.is_rejected())
    }

    /// Finds the position of the participant matching `identity`, using
    /// the given matcher.
    pub fn find_participant(
        &self,
        identity: &ParticipantIdentity,
        matcher: &super::IdentityMatcher,
    ) -> Option<usize> {
        self.participants
            .iter()
            .position(|p| matcher.matches(&p.identity, identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(raw: &str) -> ParticipantIdentity {
        ParticipantIdentity::new(raw).unwrap()
    }

    fn schedule() -> MeetingSchedule {
        MeetingSchedule::new("2025-06-01", "10:00", "30m")
    }

    #[test]
    fn create_invites_all_emails_as_pending() {
        let event = Event::create(
            UserId::new(),
            "Standup",
            schedule(),
            vec![identity("a@x.com"), identity("b@x.com")],
        )
        .unwrap();

        assert_eq!(event.participants.len(), 2);
        assert!(event
            .participants
            .iter()
            .all(|p| p.status == ResponseStatus::Pending));
        assert_eq!(event.overall_status, ResponseStatus::Pending);
        assert_eq!(event.version, 0);
    }

    #[test]
    fn create_rejects_blank_title() {
        let result = Event::create(UserId::new(), "  ", schedule(), vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_duplicate_invitees_after_normalization() {
        let result = Event::create(
            UserId::new(),
            "Standup",
            schedule(),
            vec![identity("j.doe@x.com"), identity("JDOE@x.com")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_allows_empty_participant_list() {
        let event = Event::create(UserId::new(), "Solo", schedule(), vec![]).unwrap();
        assert!(event.participants.is_empty());
    }

    #[test]
    fn scheduled_at_resolves_valid_schedule() {
        let event = Event::create(UserId::new(), "Standup", schedule(), vec![]).unwrap();
        assert!(event.scheduled_at().is_some());
    }

    #[test]
    fn scheduled_at_is_none_for_blank_schedule() {
        let event = Event::create(
            UserId::new(),
            "Standup",
            MeetingSchedule::default(),
            vec![],
        )
        .unwrap();
        assert!(event.scheduled_at().is_none());
    }

    #[test]
    fn all_participants_rejected_is_false_for_empty_list() {
        let event = Event::create(UserId::new(), "Solo", schedule(), vec![]).unwrap();
        assert!(!event.all_participants_rejected());
    }
}
