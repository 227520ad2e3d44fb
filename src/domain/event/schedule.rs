//! Free-text meeting schedule and its tolerant resolution to a Timestamp.
//!
//! The upstream UI sends date, time, and duration as free text. Bad
//! data here is a data-quality problem, not a failure: resolution
//! returns `None` (with a logged warning) and classification falls
//! back to the Pending bucket.

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::domain::foundation::Timestamp;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%B %d, %Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p", "%I %p"];

/// Raw scheduling metadata as entered upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MeetingSchedule {
    /// Calendar date, free text.
    pub date: String,

    /// Wall-clock time, free text.
    pub time: String,

    /// Human-readable duration, free text (display only).
    pub duration: String,
}

impl MeetingSchedule {
    /// Creates a schedule from the three raw fields.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            duration: duration.into(),
        }
    }

    /// Creates a schedule whose date field is a full RFC 3339 instant.
    pub fn from_timestamp(at: Timestamp, duration: impl Into<String>) -> Self {
        Self {
            date: at.as_datetime().to_rfc3339(),
            time: String::new(),
            duration: duration.into(),
        }
    }

    /// Resolves the free-text fields to a point in time, read as UTC.
    ///
    /// Returns `None` when the date cannot be parsed; the failure is
    /// logged as a data-quality warning, never raised. An unparseable
    /// time falls back to midnight so a valid date still resolves.
    pub fn resolve(&self) -> Option<Timestamp> {
        let trimmed = self.date.trim();
        if trimmed.is_empty() {
            warn!(date = %self.date, "schedule has no date, treating as unscheduled");
            return None;
        }

        // A full RFC 3339 instant carries its own time component.
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return Some(Timestamp::from_datetime(dt.with_timezone(&chrono::Utc)));
        }

        let Some(date) = parse_date(trimmed) else {
            warn!(date = %self.date, "unparseable schedule date, treating as unscheduled");
            return None;
        };

        let time = parse_time(self.time.trim()).unwrap_or_else(|| {
            if !self.time.trim().is_empty() {
                warn!(time = %self.time, "unparseable schedule time, assuming midnight");
            }
            NaiveTime::MIN
        });

        Some(Timestamp::from_date_time(date, time))
    }

    /// Returns true if the date field is blank.
    pub fn is_blank(&self) -> bool {
        self.date.trim().is_empty()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let upper = raw.to_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
}
