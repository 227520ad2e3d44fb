//! Event repository port: the persistence gateway for event records.
//!
//! The reducer itself never performs I/O; handlers load a snapshot,
//! apply a pure transition, and hand the result back through this port.

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, UserId};

/// Repository port for event persistence.
///
/// Implementations follow last-write-wins, with one guard: `update`
/// must reject a snapshot whose `version` is not newer than the stored
/// one, so a late response from a superseded request cannot clobber
/// fresher state.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Save a new event.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, event: &Event) -> Result<(), DomainError>;

    /// Update an existing event.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event doesn't exist
    /// - `StaleResponse` if the stored version is already newer
    /// - `StorageError` on persistence failure
    async fn update(&self, event: &Event) -> Result<(), DomainError>;

    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Find all events hosted by a user, newest first.
    async fn find_by_host(&self, host: &UserId) -> Result<Vec<Event>, DomainError>;

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event doesn't exist
    async fn delete(&self, id: &EventId) -> Result<(), DomainError>;
}
