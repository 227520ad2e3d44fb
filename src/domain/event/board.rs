//! Bucket assignment: grouping classified events into dashboard lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp};

use super::{classify, Bucket, Event};

/// Per-bucket event lists backing the four dashboard tabs.
///
/// The Upcoming list holds a *derived view* of each event containing
/// only accepted participants; the stored record stays untouched and
/// remains the source of truth for the other tabs. At most one Upcoming
/// entry exists per event id per assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardBoard {
    pub pending: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    pub canceled: Vec<Event>,
}

impl DashboardBoard {
    /// Classifies every event at time `now` and assigns it to its
    /// bucket lists.
    pub fn assign(events: &[Event], now: Timestamp) -> Self {
        let mut board = DashboardBoard::default();
        // Replace-on-reassignment: a second copy of an id supersedes
        // the first instead of duplicating it.
        let mut upcoming: BTreeMap<EventId, Event> = BTreeMap::new();

        for event in events {
            for bucket in classify(event, now) {
                match bucket {
                    Bucket::Pending => board.pending.push(event.clone()),
                    Bucket::Upcoming => {
                        upcoming.insert(event.id, accepted_only_view(event));
                    }
                    Bucket::Past => board.past.push(event.clone()),
                    Bucket::Canceled => board.canceled.push(event.clone()),
                }
            }
        }

        board.upcoming = upcoming.into_values().collect();
        board
    }

    /// The list backing a given tab.
    pub fn bucket(&self, bucket: Bucket) -> &[Event] {
        match bucket {
            Bucket::Pending => &self.pending,
            Bucket::Upcoming => &self.upcoming,
            Bucket::Past => &self.past,
            Bucket::Canceled => &self.canceled,
        }
    }

    /// Total entries across all tabs (an event may count more than once).
    pub fn len(&self) -> usize {
        self.pending.len() + self.upcoming.len() + self.past.len() + self.canceled.len()
    }

    /// True when no tab has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derived copy of an event keeping only accepted participants.
fn accepted_only_view(event: &Event) -> Event {
    let mut view = event.clone();
    view.participants.retain(|p| p.status.is_accepted());
    view
}
