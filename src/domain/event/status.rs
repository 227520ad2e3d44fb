//! ResponseStatus enum shared by participants and whole events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accept/reject state of a participant, or of an event as a whole.
///
/// Serializes to the wire strings `"Pending"`, `"Accepted"`, `"Rejected"`
/// that the persistence gateway stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ResponseStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ResponseStatus {
    /// Returns true if this is an acceptance.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ResponseStatus::Accepted)
    }

    /// Returns true if this is a rejection.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ResponseStatus::Rejected)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseStatus::Pending => "Pending",
            ResponseStatus::Accepted => "Accepted",
            ResponseStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}
