//! Property tests for the status reducer.

use proptest::prelude::*;

use cnnct::domain::event::{
    apply, classify, matches, Event, EventCommand, MeetingSchedule, Participant,
    ParticipantIdentity, ResponseStatus,
};
use cnnct::domain::foundation::{EventId, Timestamp, UserId};

/// Clearly distinct invitees: no pair is close enough for the fuzzy
/// matcher to merge.
const INVITEE_POOL: &[&str] = &[
    "ana@example.com",
    "bob.martin@test.org",
    "carolyn@mailbox.net",
    "derek_w@company.io",
    "elena.petrova@univ.edu",
    "francesco@studio.it",
];

fn status_strategy() -> impl Strategy<Value = ResponseStatus> {
    prop_oneof![
        Just(ResponseStatus::Pending),
        Just(ResponseStatus::Accepted),
        Just(ResponseStatus::Rejected),
    ]
}

fn schedule_strategy() -> impl Strategy<Value = MeetingSchedule> {
    prop_oneof![
        Just(MeetingSchedule::new("2030-01-15", "10:00", "30m")),
        Just(MeetingSchedule::new("2020-01-15", "10:00", "30m")),
        Just(MeetingSchedule::new("", "", "")),
        Just(MeetingSchedule::new("not a date", "later", "a while")),
    ]
}

prop_compose! {
    fn event_strategy()(
        participant_count in 0..INVITEE_POOL.len(),
        statuses in proptest::collection::vec(status_strategy(), INVITEE_POOL.len()),
        overall in status_strategy(),
        schedule in schedule_strategy(),
    ) -> Event {
        let now = Timestamp::now();
        let participants = INVITEE_POOL[..participant_count]
            .iter()
            .zip(statuses)
            .map(|(raw, status)| {
                Participant::synthesized(ParticipantIdentity::new(*raw).unwrap(), status)
            })
            .collect();
        Event {
            id: EventId::new(),
            title: "Property event".to_string(),
            host: UserId::new(),
            schedule,
            overall_status: overall,
            participants,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

fn command_strategy() -> impl Strategy<Value = EventCommand> {
    let identity = prop_oneof![
        proptest::sample::select(INVITEE_POOL).prop_map(|s| s.to_string()),
        Just("someone.new@else.where".to_string()),
    ];
    prop_oneof![
        Just(EventCommand::AcceptEvent),
        Just(EventCommand::RejectEvent),
        (identity, prop_oneof![
            Just(ResponseStatus::Accepted),
            Just(ResponseStatus::Rejected),
        ])
            .prop_map(|(raw, status)| EventCommand::SetParticipant {
                identity: ParticipantIdentity::new(raw).unwrap(),
                status,
            }),
    ]
}

proptest! {
    #[test]
    fn apply_is_idempotent(event in event_strategy(), command in command_strategy()) {
        let once = apply(&event, &command);
        let twice = apply(&once, &command);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn apply_never_mutates_its_input(event in event_strategy(), command in command_strategy()) {
        let snapshot = event.clone();
        let _ = apply(&event, &command);
        prop_assert_eq!(event, snapshot);
    }

    #[test]
    fn set_participant_never_drops_the_identity(
        event in event_strategy(),
        raw in proptest::sample::select(INVITEE_POOL),
        status in prop_oneof![Just(ResponseStatus::Accepted), Just(ResponseStatus::Rejected)],
    ) {
        let identity = ParticipantIdentity::new(raw).unwrap();
        let command = EventCommand::SetParticipant {
            identity: identity.clone(),
            status,
        };
        let next = apply(&event, &command);

        let found = next
            .participants
            .iter()
            .find(|p| matches(&p.identity, &identity));
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().status, status);
    }

    #[test]
    fn classification_is_total(event in event_strategy()) {
        let buckets = classify(&event, Timestamp::now());
        prop_assert!(!buckets.is_empty());
    }

    #[test]
    fn accept_event_accepts_everything(event in event_strategy()) {
        let next = apply(&event, &EventCommand::AcceptEvent);
        prop_assert_eq!(next.overall_status, ResponseStatus::Accepted);
        prop_assert!(next.participants.iter().all(|p| p.status.is_accepted()));
    }

    #[test]
    fn rejecting_every_participant_cancels_the_event(event in event_strategy()) {
        prop_assume!(!event.participants.is_empty());

        let mut current = event.clone();
        for participant in &event.participants {
            let command = EventCommand::SetParticipant {
                identity: participant.identity.clone(),
                status: ResponseStatus::Rejected,
            };
            current = apply(&current, &command);
        }

        prop_assert!(current.participants.iter().all(|p| p.status.is_rejected()));
        prop_assert_eq!(current.overall_status, ResponseStatus::Rejected);
    }

    #[test]
    fn matching_is_reflexive(raw in "[a-z]{1,8}(\\.[a-z]{1,4})?@[a-z]{2,8}\\.(com|org|net)") {
        let identity = ParticipantIdentity::new(raw).unwrap();
        prop_assert!(matches(&identity, &identity));
    }

    #[test]
    fn matching_is_symmetric(
        raw_a in "[a-z]{1,8}@[a-z]{2,8}\\.com",
        raw_b in "[a-z]{1,8}@[a-z]{2,8}\\.com",
    ) {
        let a = ParticipantIdentity::new(raw_a).unwrap();
        let b = ParticipantIdentity::new(raw_b).unwrap();
        prop_assert_eq!(matches(&a, &b), matches(&b, &a));
    }

    #[test]
    fn version_grows_only_on_change(event in event_strategy(), command in command_strategy()) {
        let next = apply(&event, &command);
        if next == event {
            prop_assert_eq!(next.version, event.version);
        } else {
            prop_assert_eq!(next.version, event.version + 1);
        }
    }
}
