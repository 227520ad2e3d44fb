//! GetDashboardHandler - Query handler for the classified dashboard.

use std::sync::Arc;

use tracing::debug;

use crate::domain::event::DashboardBoard;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::EventRepository;

/// Query for a user's dashboard at a point in time.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub user_id: UserId,
    /// Classification time; callers pass `Timestamp::now()` outside tests.
    pub now: Timestamp,
}

/// Handler producing the four per-tab event lists.
pub struct GetDashboardHandler {
    repository: Arc<dyn EventRepository>,
}

impl GetDashboardHandler {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Fetches the user's events and classifies them into buckets.
    ///
    /// # Errors
    ///
    /// - `StorageError` from the repository
    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardBoard, DomainError> {
        let events = self.repository.find_by_host(&query.user_id).await?;
        let board = DashboardBoard::assign(&events, query.now);
        debug!(
            user = %query.user_id,
            pending = board.pending.len(),
            upcoming = board.upcoming.len(),
            past = board.past.len(),
            canceled = board.canceled.len(),
            "dashboard classified"
        );
        Ok(board)
    }
}
