//! In-memory availability repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{AvailabilityId, DomainError, ErrorCode, UserId};
use crate::ports::AvailabilityRepository;

/// `HashMap`-backed [`AvailabilityRepository`] keyed by (user, day).
#[derive(Debug, Default)]
pub struct InMemoryAvailabilityRepository {
    slots: RwLock<HashMap<(UserId, u8), AvailabilitySlot>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "availability store lock poisoned")
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn upsert(&self, slot: &AvailabilitySlot) -> Result<(), DomainError> {
        let mut slots = self.slots.write().map_err(|_| Self::lock_poisoned())?;
        slots.insert((slot.user, slot.day_of_week), slot.clone());
        Ok(())
    }

    async fn find_by_user(&self, user: &UserId) -> Result<Vec<AvailabilitySlot>, DomainError> {
        let slots = self.slots.read().map_err(|_| Self::lock_poisoned())?;
        let mut result: Vec<AvailabilitySlot> = slots
            .values()
            .filter(|s| s.user == *user)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.day_of_week);
        Ok(result)
    }

    async fn delete(&self, id: &AvailabilityId) -> Result<(), DomainError> {
        let mut slots = self.slots.write().map_err(|_| Self::lock_poisoned())?;
        let key = slots
            .iter()
            .find(|(_, slot)| slot.id == *id)
            .map(|(key, _)| *key);
        match key {
            Some(key) => {
                slots.remove(&key);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::AvailabilityNotFound,
                format!("Availability {} not found", id),
            )),
        }
    }
}
