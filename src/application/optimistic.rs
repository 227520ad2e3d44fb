//! Optimistic in-memory event cache with rollback.
//!
//! The presentation layer applies a command locally the moment the user
//! acts, then reconciles with the persistence gateway's response:
//! confirm on success, roll back to the pre-optimistic snapshot on
//! failure. A late response for a locally superseded event is detected
//! by comparing the monotonic `version` counter and ignored.
//!
//! Single-threaded, UI-callback-driven use; the cache owns its state
//! and needs no locking.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::event::{apply_with, Event, EventCommand, IdentityMatcher};
use crate::domain::foundation::{DomainError, ErrorCode, EventId};

/// Outcome of reconciling a gateway response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The response was fresher than the local view and was applied.
    Applied,
    /// The local view had moved past the response; it was discarded.
    Stale,
}

/// Local event snapshots with optimistic command application.
#[derive(Debug, Default)]
pub struct OptimisticEventCache {
    matcher: IdentityMatcher,
    /// Current local view per event.
    entries: HashMap<EventId, Event>,
    /// Pre-optimistic snapshot per event with an in-flight write.
    snapshots: HashMap<EventId, Event>,
}

impl OptimisticEventCache {
    /// Creates an empty cache with the default identity matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache with a configured matcher.
    pub fn with_matcher(matcher: IdentityMatcher) -> Self {
        Self {
            matcher,
            entries: HashMap::new(),
            snapshots: HashMap::new(),
        }
    }

    /// Replaces the cached view with freshly fetched events.
    ///
    /// Pending snapshots are dropped: a full refetch supersedes any
    /// in-flight reconciliation.
    pub fn refresh(&mut self, events: Vec<Event>) {
        self.entries = events.into_iter().map(|e| (e.id, e)).collect();
        self.snapshots.clear();
    }

    /// The current local view of an event.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.entries.get(id)
    }

    /// All currently cached events.
    pub fn events(&self) -> Vec<Event> {
        self.entries.values().cloned().collect()
    }

    /// Applies a command locally before the gateway confirms it.
    ///
    /// Keeps the pre-optimistic snapshot for [`Self::rollback`]. If several
    /// commands pile up before any confirmation, the snapshot of the
    /// first one is kept, so rollback restores the last confirmed state.
    ///
    /// Returns the new local snapshot to send to the gateway.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event is not cached
    pub fn apply_optimistic(
        &mut self,
        id: &EventId,
        command: &EventCommand,
    ) -> Result<Event, DomainError> {
        let current = self
            .entries
            .get(id)
            .ok_or_else(|| DomainError::event_not_found(id))?;

        let next = apply_with(current, command, &self.matcher);
        self.snapshots
            .entry(*id)
            .or_insert_with(|| current.clone());
        debug!(event = %id, version = next.version, "applied optimistic update");
        self.entries.insert(*id, next.clone());
        Ok(next)
    }

    /// Reconciles a gateway response with the local view.
    ///
    /// A response older than the local version is treated as stale and
    /// discarded; otherwise it becomes the confirmed state and the
    /// rollback snapshot is dropped.
    pub fn confirm(&mut self, response: Event) -> Reconciliation {
        if let Some(current) = self.entries.get(&response.id) {
            if response.version < current.version {
                warn!(
                    event = %response.id,
                    response_version = response.version,
                    local_version = current.version,
                    "discarding stale gateway response"
                );
                return Reconciliation::Stale;
            }
        }
        self.snapshots.remove(&response.id);
        self.entries.insert(response.id, response);
        Reconciliation::Applied
    }

    /// Restores the pre-optimistic snapshot after a failed write.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if there is no snapshot to roll back to
    pub fn rollback(&mut self, id: &EventId) -> Result<(), DomainError> {
        let snapshot = self.snapshots.remove(id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::EventNotFound,
                format!("No optimistic snapshot for event {}", id),
            )
        })?;
        warn!(event = %id, restored_version = snapshot.version, "rolling back optimistic update");
        self.entries.insert(*id, snapshot);
        Ok(())
    }
}
