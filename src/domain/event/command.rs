//! Status-change commands applied to an event.

use serde::{Deserialize, Serialize};

use super::{ParticipantIdentity, ResponseStatus};

/// A status-change command, either whole-event or per-participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCommand {
    /// Accept the whole event: every existing participant accepts too.
    AcceptEvent,

    /// Reject the whole event: every existing participant rejects too.
    RejectEvent,

    /// Record one invitee's response. Synthesizes the participant if
    /// the identity is not yet on the list.
    SetParticipant {
        identity: ParticipantIdentity,
        status: ResponseStatus,
    },
}

impl EventCommand {
    /// Per-participant acceptance.
    pub fn accept_participant(identity: ParticipantIdentity) -> Self {
        EventCommand::SetParticipant {
            identity,
            status: ResponseStatus::Accepted,
        }
    }

    /// Per-participant rejection.
    pub fn reject_participant(identity: ParticipantIdentity) -> Self {
        EventCommand::SetParticipant {
            identity,
            status: ResponseStatus::Rejected,
        }
    }
}
