//! GetAvailabilityHandler - list a user's weekly windows.

use std::sync::Arc;

use crate::domain::availability::AvailabilitySlot;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AvailabilityRepository;

/// Query for a user's configured availability.
#[derive(Debug, Clone)]
pub struct GetAvailabilityQuery {
    pub user_id: UserId,
}

/// Handler returning the week's windows, ordered by day.
pub struct GetAvailabilityHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl GetAvailabilityHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `StorageError` from the repository
    pub async fn handle(&self, query: GetAvailabilityQuery) -> Result<Vec<AvailabilitySlot>, DomainError> {
        self.repository.find_by_user(&query.user_id).await
    }
}
