//! Wire-format adapters: the JSON boundary with the persistence gateway.

mod event_dto;

pub use event_dto::{EventDto, ParticipantDto, ScheduledAtDto};
