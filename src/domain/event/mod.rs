//! Event domain: records, responses, and the status reducer.
//!
//! The reducer proper is three pure functions:
//! - [`classify`] — derive the dashboard buckets for an event,
//! - [`apply`] — compute the next event snapshot for a command,
//! - [`matches`] — decide whether two identity strings are one person.

mod apply;
mod board;
mod classify;
mod command;
mod identity;
mod participant;
mod record;
mod schedule;
mod status;

pub use apply::{apply, apply_with};
pub use board::DashboardBoard;
pub use classify::{classify, Bucket};
pub use command::EventCommand;
pub use identity::{
    matches, IdentityMatcher, ParticipantIdentity, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use participant::Participant;
pub use record::Event;
pub use schedule::MeetingSchedule;
pub use status::ResponseStatus;
