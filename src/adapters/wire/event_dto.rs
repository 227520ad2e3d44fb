//! Wire-format event records.
//!
//! The persistence gateway speaks a JSON shape with camelCase keys,
//! free-text `scheduledAt` fields, and status strings. Decoding is
//! tolerant: a missing participant list becomes empty, an unknown
//! status string downgrades to Pending with a warning. The typed
//! domain record is populated here, at the boundary, so the reducer
//! never parses strings within strings.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::event::{
    Event, MeetingSchedule, Participant, ParticipantIdentity, ResponseStatus,
};
use crate::domain::foundation::{EventId, Timestamp, UserId, ValidationError};

/// Wire shape of one participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub identity: String,
    #[serde(default)]
    pub status: String,
}

/// Wire shape of the free-text schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduledAtDto {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration: String,
}

/// Wire shape of an event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub overall_status: String,
    #[serde(default)]
    pub scheduled_at: ScheduledAtDto,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub version: u64,
}

impl EventDto {
    /// Builds the wire record from a domain event.
    pub fn from_domain(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            overall_status: event.overall_status.to_string(),
            scheduled_at: ScheduledAtDto {
                date: event.schedule.date.clone(),
                time: event.schedule.time.clone(),
                duration: event.schedule.duration.clone(),
            },
            participants: event
                .participants
                .iter()
                .map(|p| ParticipantDto {
                    identity: p.identity.as_str().to_string(),
                    status: p.status.to_string(),
                })
                .collect(),
            version: event.version,
        }
    }

    /// Converts the wire record into a domain event owned by `host`.
    ///
    /// Participants with a blank identity are dropped with a warning;
    /// everything else decodes tolerantly.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the id is not a UUID
    /// - `EmptyField` if the title is blank
    pub fn into_domain(self, host: UserId) -> Result<Event, ValidationError> {
        let id: EventId = self
            .id
            .parse()
            .map_err(|_| ValidationError::invalid_format("id", format!("'{}' is not a UUID", self.id)))?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let mut participants = Vec::with_capacity(self.participants.len());
        for dto in self.participants {
            match ParticipantIdentity::new(dto.identity) {
                Ok(identity) => {
                    let status = parse_status(&dto.status);
                    participants.push(Participant::synthesized(identity, status));
                }
                Err(_) => {
                    warn!(event = %id, "dropping wire participant with blank identity");
                }
            }
        }

        let now = Timestamp::now();
        Ok(Event {
            id,
            title: self.title,
            host,
            schedule: MeetingSchedule::new(
                self.scheduled_at.date,
                self.scheduled_at.time,
                self.scheduled_at.duration,
            ),
            overall_status: parse_status(&self.overall_status),
            participants,
            version: self.version,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Parses a wire status string, downgrading anything unknown to Pending.
fn parse_status(raw: &str) -> ResponseStatus {
    match raw {
        "Accepted" => ResponseStatus::Accepted,
        "Rejected" => ResponseStatus::Rejected,
        "Pending" | "" => ResponseStatus::Pending,
        other => {
            warn!(status = other, "unknown wire status, treating as Pending");
            ResponseStatus::Pending
        }
    }
}
