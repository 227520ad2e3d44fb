//! End-to-end dashboard scenarios through handlers and in-memory adapters.

use std::sync::Arc;

use cnnct::adapters::memory::InMemoryEventRepository;
use cnnct::application::handlers::{
    CreateEventCommand, CreateEventHandler, GetDashboardHandler, GetDashboardQuery,
    RespondToParticipantCommand, RespondToParticipantHandler,
};
use cnnct::application::{OptimisticEventCache, Reconciliation};
use cnnct::domain::event::{Bucket, EventCommand, MeetingSchedule, ResponseStatus};
use cnnct::domain::foundation::{Timestamp, UserId};
use cnnct::ports::EventRepository;

struct Fixture {
    repository: Arc<InMemoryEventRepository>,
    create: CreateEventHandler,
    respond: RespondToParticipantHandler,
    dashboard: GetDashboardHandler,
    host: UserId,
    now: Timestamp,
}

impl Fixture {
    fn new() -> Self {
        let repository = Arc::new(InMemoryEventRepository::new());
        Self {
            create: CreateEventHandler::new(repository.clone()),
            respond: RespondToParticipantHandler::new(repository.clone()),
            dashboard: GetDashboardHandler::new(repository.clone()),
            repository,
            host: UserId::new(),
            now: Timestamp::now(),
        }
    }

    async fn create_event(
        &self,
        title: &str,
        schedule: MeetingSchedule,
        invited: Vec<&str>,
    ) -> cnnct::domain::event::Event {
        self.create
            .handle(CreateEventCommand {
                host: self.host,
                title: title.to_string(),
                schedule,
                invited: invited.into_iter().map(String::from).collect(),
            })
            .await
            .unwrap()
    }

    async fn board(&self) -> cnnct::domain::event::DashboardBoard {
        self.dashboard
            .handle(GetDashboardQuery {
                user_id: self.host,
                now: self.now,
            })
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn pending_future_event_without_participants_shows_only_in_pending() {
    let fx = Fixture::new();
    fx.create_event(
        "Quiet kickoff",
        MeetingSchedule::from_timestamp(fx.now.add_days(3), "30m"),
        vec![],
    )
    .await;

    let board = fx.board().await;
    assert_eq!(board.pending.len(), 1);
    assert!(board.upcoming.is_empty());
    assert!(board.past.is_empty());
    assert!(board.canceled.is_empty());
}

#[tokio::test]
async fn accepted_response_moves_event_to_upcoming_with_accepted_view() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "Design review",
            MeetingSchedule::from_timestamp(fx.now.add_days(3), "30m"),
            vec!["ana@example.com", "bob@example.com"],
        )
        .await;

    fx.respond
        .handle(RespondToParticipantCommand {
            event_id: event.id,
            identity: "ana@example.com".to_string(),
            accept: true,
        })
        .await
        .unwrap();

    let board = fx.board().await;
    // Acceptance resolves the event, so Pending holds nothing; the
    // Upcoming view carries only the accepted invitee.
    assert_eq!(board.upcoming.len(), 1);
    assert_eq!(board.upcoming[0].participants.len(), 1);
    assert_eq!(
        board.upcoming[0].participants[0].identity.as_str(),
        "ana@example.com"
    );
}

#[tokio::test]
async fn stored_partial_acceptance_keeps_event_in_both_tabs() {
    // Data arriving from storage can hold an accepted participant
    // under a still-Pending event.
    let fx = Fixture::new();
    let mut event = fx
        .create_event(
            "Imported event",
            MeetingSchedule::from_timestamp(fx.now.add_days(3), "30m"),
            vec!["ana@example.com"],
        )
        .await;
    event.participants[0].status = ResponseStatus::Accepted;
    event.version += 1;
    fx.repository.update(&event).await.unwrap();

    let board = fx.board().await;
    assert_eq!(board.pending.len(), 1);
    assert_eq!(board.upcoming.len(), 1);
}

#[tokio::test]
async fn typo_identity_updates_existing_participant_without_duplicate() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "One-on-one",
            MeetingSchedule::from_timestamp(fx.now.add_days(1), "30m"),
            vec!["jdoe@gmailcom"],
        )
        .await;

    let next = fx
        .respond
        .handle(RespondToParticipantCommand {
            event_id: event.id,
            identity: "J.Doe@Gmail.com".to_string(),
            accept: true,
        })
        .await
        .unwrap();

    assert_eq!(next.participants.len(), 1);
    assert!(next.participants[0].status.is_accepted());
}

#[tokio::test]
async fn rejecting_final_holdout_cancels_the_event() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "Doomed meeting",
            MeetingSchedule::from_timestamp(fx.now.add_days(1), "30m"),
            vec!["ana@example.com"],
        )
        .await;

    fx.respond
        .handle(RespondToParticipantCommand {
            event_id: event.id,
            identity: "ana@example.com".to_string(),
            accept: false,
        })
        .await
        .unwrap();

    // A brand-new identity rejects too: synthesized, and with everyone
    // rejected the event flips to Rejected.
    let next = fx
        .respond
        .handle(RespondToParticipantCommand {
            event_id: event.id,
            identity: "new@example.net".to_string(),
            accept: false,
        })
        .await
        .unwrap();

    assert_eq!(next.participants.len(), 2);
    assert_eq!(next.overall_status, ResponseStatus::Rejected);

    let board = fx.board().await;
    assert_eq!(board.canceled.len(), 1);
    assert!(board.pending.is_empty());
}

#[tokio::test]
async fn unparseable_schedule_falls_back_to_pending_tab() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "No date yet",
            MeetingSchedule::new("", "", ""),
            vec!["ana@example.com"],
        )
        .await;

    // Even fully accepted, the event stays visible via the fallback.
    fx.respond
        .handle(RespondToParticipantCommand {
            event_id: event.id,
            identity: "ana@example.com".to_string(),
            accept: true,
        })
        .await
        .unwrap();

    let board = fx.board().await;
    assert_eq!(board.pending.len(), 1);
    assert_eq!(board.len(), 1);
}

#[tokio::test]
async fn elapsed_event_lands_in_past_tab() {
    let fx = Fixture::new();
    fx.create_event(
        "Last week's sync",
        MeetingSchedule::from_timestamp(fx.now.add_days(-7), "30m"),
        vec!["ana@example.com"],
    )
    .await;

    let board = fx.board().await;
    assert_eq!(board.past.len(), 1);
    // Still pending overall, so it shows there too
    assert_eq!(board.pending.len(), 1);
}

#[tokio::test]
async fn optimistic_flow_confirms_against_gateway() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "Optimistic sync",
            MeetingSchedule::from_timestamp(fx.now.add_days(1), "30m"),
            vec!["ana@example.com"],
        )
        .await;

    let mut cache = OptimisticEventCache::new();
    cache.refresh(fx.repository.find_by_host(&fx.host).await.unwrap());

    // User acts: local view updates immediately
    let optimistic = cache
        .apply_optimistic(&event.id, &EventCommand::AcceptEvent)
        .unwrap();
    assert_eq!(
        cache.get(&event.id).unwrap().overall_status,
        ResponseStatus::Accepted
    );

    // Gateway persists and echoes the new snapshot
    fx.repository.update(&optimistic).await.unwrap();
    let echoed = fx.repository.find_by_id(&event.id).await.unwrap().unwrap();
    assert_eq!(cache.confirm(echoed), Reconciliation::Applied);
}

#[tokio::test]
async fn optimistic_flow_rolls_back_on_gateway_failure() {
    let fx = Fixture::new();
    let event = fx
        .create_event(
            "Flaky network",
            MeetingSchedule::from_timestamp(fx.now.add_days(1), "30m"),
            vec!["ana@example.com"],
        )
        .await;

    let mut cache = OptimisticEventCache::new();
    cache.refresh(vec![event.clone()]);

    let stale_snapshot = cache
        .apply_optimistic(&event.id, &EventCommand::RejectEvent)
        .unwrap();

    // Simulate the write losing a race: the repository already holds a
    // newer version, so persisting the snapshot fails as retryable.
    let mut winner = event.clone();
    winner.overall_status = ResponseStatus::Accepted;
    winner.version = stale_snapshot.version + 1;
    fx.repository.update(&winner).await.unwrap();
    let err = fx.repository.update(&stale_snapshot).await.unwrap_err();
    assert!(err.is_retryable());

    // The UI compensates by rolling back to the pre-optimistic state
    cache.rollback(&event.id).unwrap();
    assert_eq!(cache.get(&event.id).unwrap(), &event);
}

#[tokio::test]
async fn board_membership_tabs_partition_correctly_across_many_events() {
    let fx = Fixture::new();

    for day in [-2i64, -1, 1, 2] {
        fx.create_event(
            &format!("Offset {}", day),
            MeetingSchedule::from_timestamp(fx.now.add_days(day), "30m"),
            vec!["ana@example.com"],
        )
        .await;
    }

    let board = fx.board().await;
    assert_eq!(board.pending.len(), 4);
    assert_eq!(board.past.len(), 2);
    assert!(board.upcoming.is_empty());

    for event in board.bucket(Bucket::Past) {
        assert!(event.scheduled_at().unwrap().is_before(&fx.now));
    }
}
