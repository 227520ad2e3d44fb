//! In-memory event repository for tests and the demo binary.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::EventRepository;

/// `HashMap`-backed [`EventRepository`].
///
/// Enforces the port's staleness guard: an `update` carrying a version
/// at or below the stored one is rejected with `STALE_RESPONSE`.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<EventId, Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "event store lock poisoned")
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, event: &Event) -> Result<(), DomainError> {
        let mut events = self.events.write().map_err(|_| Self::lock_poisoned())?;
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let mut events = self.events.write().map_err(|_| Self::lock_poisoned())?;
        let stored = events
            .get(&event.id)
            .ok_or_else(|| DomainError::event_not_found(event.id))?;

        if event.version <= stored.version {
            return Err(DomainError::new(
                ErrorCode::StaleResponse,
                format!(
                    "Update for event {} carries version {} but {} is stored",
                    event.id, event.version, stored.version
                ),
            ));
        }

        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let events = self.events.read().map_err(|_| Self::lock_poisoned())?;
        Ok(events.get(id).cloned())
    }

    async fn find_by_host(&self, host: &UserId) -> Result<Vec<Event>, DomainError> {
        let events = self.events.read().map_err(|_| Self::lock_poisoned())?;
        let mut result: Vec<Event> = events
            .values()
            .filter(|e| e.host == *host)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        let mut events = self.events.write().map_err(|_| Self::lock_poisoned())?;
        events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::event_not_found(id))
    }
}
