//! Pure status-transition function for events.
//!
//! Takes an event snapshot and a command, returns the next snapshot.
//! Never mutates its input: callers keep an optimistically-updated
//! cache of prior snapshots, so concurrent readers must be unaffected.

use tracing::debug;

use crate::domain::foundation::Timestamp;

use super::{Event, EventCommand, IdentityMatcher, Participant, ResponseStatus};

/// Applies a status-change command with the default identity matcher.
pub fn apply(event: &Event, command: &EventCommand) -> Event {
    apply_with(event, command, &IdentityMatcher::default())
}

/// Applies a status-change command, producing the next event snapshot.
///
/// Behavior:
/// - `AcceptEvent` / `RejectEvent` set the overall status and every
///   existing participant's status. An empty participant list stays
///   empty.
/// - `SetParticipant` replaces the status of the matching participant,
///   or synthesizes one when no identity matches (an unrecognized
///   identity is never silently dropped). The overall status is then
///   recomputed: any acceptance resolves the event to Accepted; a
///   rejection resolves it to Rejected only once every participant has
///   rejected.
///
/// The `version` counter is bumped only when the command actually
/// changed something, which makes repeated application idempotent.
pub fn apply_with(event: &Event, command: &EventCommand, matcher: &IdentityMatcher) -> Event {
    let mut next = event.clone();

    match command {
        EventCommand::AcceptEvent => {
            next.overall_status = ResponseStatus::Accepted;
            for participant in &mut next.participants {
                participant.status = ResponseStatus::Accepted;
            }
        }
        EventCommand::RejectEvent => {
            next.overall_status = ResponseStatus::Rejected;
            for participant in &mut next.participants {
                participant.status = ResponseStatus::Rejected;
            }
        }
        EventCommand::SetParticipant { identity, status } => {
            match next.find_participant(identity, matcher) {
                Some(index) => {
                    debug!(
                        event = %event.id,
                        stored = %next.participants[index].identity,
                        requested = %identity,
                        new_status = %status,
                        "updating matched participant"
                    );
                    next.participants[index] = next.participants[index].with_status(*status);
                }
                None => {
                    debug!(
                        event = %event.id,
                        identity = %identity,
                        new_status = %status,
                        "no participant matched, synthesizing"
                    );
                    next.participants
                        .push(Participant::synthesized(identity.clone(), *status));
                }
            }

            if status.is_accepted() {
                next.overall_status = ResponseStatus::Accepted;
            } else if status.is_rejected() && next.all_participants_rejected() {
                next.overall_status = ResponseStatus::Rejected;
            }
        }
    }

    if next.overall_status == event.overall_status && next.participants == event.participants {
        return event.clone();
    }

    next.version = event.version + 1;
    next.updated_at = Timestamp::now();
    next
}
