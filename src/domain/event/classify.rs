//! Dashboard classification of events into derived buckets.
//!
//! Buckets are computed fresh on every read and never persisted. One
//! event can legitimately sit in several buckets at once: an event that
//! is Pending overall stays on the Pending tab even after a participant
//! accepts and it starts showing under Upcoming.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::Timestamp;

use super::{Event, ResponseStatus};

/// Derived dashboard tab for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Pending,
    Upcoming,
    Past,
    Canceled,
}

impl Bucket {
    /// All buckets in dashboard tab order.
    pub const ALL: [Bucket; 4] = [Bucket::Pending, Bucket::Upcoming, Bucket::Past, Bucket::Canceled];
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bucket::Pending => "Pending",
            Bucket::Upcoming => "Upcoming",
            Bucket::Past => "Past",
            Bucket::Canceled => "Canceled",
        };
        write!(f, "{}", s)
    }
}

/// Classifies an event into its dashboard buckets at time `now`.
///
/// All rules are evaluated independently:
/// 1. Pending overall status → `Pending`
/// 2. Scheduled at or before `now` → `Past`
/// 3. Any accepted participant and a future schedule → `Upcoming`
/// 4. Rejected overall status → `Canceled`
/// 5. Fallback when nothing matched (e.g. an accepted event whose
///    schedule does not parse) → `Pending`
///
/// The result is never empty; an event is never dropped silently.
pub fn classify(event: &Event, now: Timestamp) -> BTreeSet<Bucket> {
    let mut buckets = BTreeSet::new();

    if event.overall_status == ResponseStatus::Pending {
        buckets.insert(Bucket::Pending);
    }

    // An unresolvable schedule makes both time rules false; resolve()
    // already logged the data-quality warning.
    if let Some(scheduled_at) = event.scheduled_at() {
        if scheduled_at <= now {
            buckets.insert(Bucket::Past);
        }
        if event.has_accepted_participant() && scheduled_at > now {
            buckets.insert(Bucket::Upcoming);
        }
    }

    if event.overall_status == ResponseStatus::Rejected {
        buckets.insert(Bucket::Canceled);
    }

    if buckets.is_empty() {
        warn!(event = %event.id, "no classification rule matched, falling back to Pending");
        buckets.insert(Bucket::Pending);
    }

    buckets
}
