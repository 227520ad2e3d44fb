//! Participant value: one invitee and their response.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::{ParticipantIdentity, ResponseStatus};

/// One invitee on an event.
///
/// Created when the event is created (one per invited email) or
/// synthesized lazily when a status command references an identity not
/// yet on the list. Never deleted independently of its owning event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Free-typed email identifying the invitee.
    pub identity: ParticipantIdentity,

    /// Linked user account, when the invitee is registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,

    /// The invitee's current response.
    pub status: ResponseStatus,
}

impl Participant {
    /// Creates a participant with a Pending response.
    pub fn invited(identity: ParticipantIdentity) -> Self {
        Self {
            identity,
            user: None,
            status: ResponseStatus::Pending,
        }
    }

    /// Creates a participant with a given response, used when a status
    /// command references an identity not yet on the list.
    pub fn synthesized(identity: ParticipantIdentity, status: ResponseStatus) -> Self {
        Self {
            identity,
            user: None,
            status,
        }
    }

    /// Returns a copy with a different status.
    pub fn with_status(&self, status: ResponseStatus) -> Self {
        Self {
            identity: self.identity.clone(),
            user: self.user,
            status,
        }
    }
}
