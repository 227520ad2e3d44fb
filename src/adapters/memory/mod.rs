//! In-memory adapters for tests and the demo binary.

mod availability_store;
mod event_store;
mod session_store;

pub use availability_store::InMemoryAvailabilityRepository;
pub use event_store::InMemoryEventRepository;
pub use session_store::InMemorySessionStore;
