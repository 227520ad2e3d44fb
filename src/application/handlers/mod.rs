//! Application handlers - one use case per file.

mod create_event;
mod get_availability;
mod get_dashboard;
mod respond_to_event;
mod respond_to_participant;
mod set_availability;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use get_availability::{GetAvailabilityHandler, GetAvailabilityQuery};
pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use respond_to_event::{RespondToEventCommand, RespondToEventHandler};
pub use respond_to_participant::{RespondToParticipantCommand, RespondToParticipantHandler};
pub use set_availability::{SetAvailabilityCommand, SetAvailabilityHandler};
