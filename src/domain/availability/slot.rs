//! Weekly availability slots.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AvailabilityId, Timestamp, UserId, ValidationError};

/// Wall-clock time of day in "HH:MM" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parses an "HH:MM" string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the string is not a valid 24-hour time.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| {
                ValidationError::invalid_format("time", format!("expected HH:MM, got '{}'", raw))
            })
    }

    /// Builds from hour and minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self).ok_or_else(|| {
            ValidationError::invalid_format("time", format!("{}:{:02} is out of range", hour, minute))
        })
    }

    /// Returns the inner NaiveTime.
    pub fn as_time(&self) -> &NaiveTime {
        &self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// One user's availability window for one day of the week.
///
/// Day numbering is Sunday-based (0 = Sunday .. 6 = Saturday), matching
/// the stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: AvailabilityId,
    pub user: UserId,
    pub day_of_week: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub is_available: bool,
    pub timezone: String,
    pub created_at: Timestamp,
}

impl AvailabilitySlot {
    /// Creates a slot for a day of the week.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `day_of_week` is not 0..=6
    /// - `InvalidFormat` if the window is empty or inverted
    /// - `EmptyField` if the timezone is blank
    pub fn new(
        user: UserId,
        day_of_week: u8,
        start: TimeOfDay,
        end: TimeOfDay,
        timezone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if day_of_week > 6 {
            return Err(ValidationError::out_of_range(
                "day_of_week",
                0,
                6,
                i32::from(day_of_week),
            ));
        }
        if start >= end {
            return Err(ValidationError::invalid_format(
                "end",
                format!("window {}-{} is empty or inverted", start, end),
            ));
        }
        let timezone = timezone.into();
        if timezone.trim().is_empty() {
            return Err(ValidationError::empty_field("timezone"));
        }

        Ok(Self {
            id: AvailabilityId::new(),
            user,
            day_of_week,
            start,
            end,
            is_available: true,
            timezone,
            created_at: Timestamp::now(),
        })
    }

    /// Returns true if the requested window fits entirely inside this
    /// slot and the slot is open.
    pub fn covers(&self, slot_start: TimeOfDay, slot_end: TimeOfDay) -> bool {
        self.is_available && slot_start >= self.start && slot_end <= self.end
    }

    /// Marks the day as unavailable without discarding the window.
    pub fn close(&mut self) {
        self.is_available = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(raw: &str) -> TimeOfDay {
        TimeOfDay::parse(raw).unwrap()
    }

    fn slot() -> AvailabilitySlot {
        AvailabilitySlot::new(UserId::new(), 1, time("09:00"), time("17:00"), "UTC").unwrap()
    }

    #[test]
    fn time_of_day_parses_hh_mm() {
        assert_eq!(time("09:30").to_string(), "09:30");
    }

    #[test]
    fn time_of_day_rejects_garbage() {
        assert!(TimeOfDay::parse("nine ish").is_err());
        assert!(TimeOfDay::parse("25:00").is_err());
    }

    #[test]
    fn new_rejects_bad_day_of_week() {
        let result = AvailabilitySlot::new(UserId::new(), 7, time("09:00"), time("17:00"), "UTC");
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_inverted_window() {
        let result = AvailabilitySlot::new(UserId::new(), 1, time("17:00"), time("09:00"), "UTC");
        assert!(result.is_err());
    }

    #[test]
    fn new_rejects_blank_timezone() {
        let result = AvailabilitySlot::new(UserId::new(), 1, time("09:00"), time("17:00"), " ");
        assert!(result.is_err());
    }

    #[test]
    fn covers_contained_window() {
        assert!(slot().covers(time("10:00"), time("11:00")));
        assert!(slot().covers(time("09:00"), time("17:00")));
    }

    #[test]
    fn does_not_cover_overflowing_window() {
        assert!(!slot().covers(time("08:00"), time("10:00")));
        assert!(!slot().covers(time("16:30"), time("17:30")));
    }

    #[test]
    fn closed_slot_covers_nothing() {
        let mut slot = slot();
        slot.close();
        assert!(!slot.covers(time("10:00"), time("11:00")));
    }
}
