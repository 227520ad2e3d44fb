//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod availability_repository;
mod event_repository;
mod session_store;

pub use availability_repository::AvailabilityRepository;
pub use event_repository::EventRepository;
pub use session_store::SessionStore;
