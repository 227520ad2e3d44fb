//! Demo binary: seed an in-memory store and print a classified dashboard.

use std::sync::Arc;

use cnnct::adapters::memory::{InMemoryEventRepository, InMemorySessionStore};
use cnnct::application::handlers::{
    CreateEventCommand, CreateEventHandler, GetDashboardHandler, GetDashboardQuery,
    RespondToParticipantCommand, RespondToParticipantHandler,
};
use cnnct::application::SessionContext;
use cnnct::config::AppConfig;
use cnnct::domain::event::{Bucket, MeetingSchedule};
use cnnct::domain::foundation::{Timestamp, UserId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.telemetry.init();

    let session_store = InMemorySessionStore::new();
    let session = SessionContext::start(UserId::new(), "Demo host")?;
    session.persist(&session_store).await?;

    let repository = Arc::new(InMemoryEventRepository::new());
    let create = CreateEventHandler::new(repository.clone());
    let respond =
        RespondToParticipantHandler::with_matcher(repository.clone(), config.matching.matcher());
    let dashboard = GetDashboardHandler::new(repository);

    let now = Timestamp::now();
    let planning = create
        .handle(CreateEventCommand {
            host: session.user_id,
            title: "Sprint planning".to_string(),
            schedule: MeetingSchedule::from_timestamp(now.add_days(2), "1h"),
            invited: vec!["ana@example.com".to_string(), "bo@example.com".to_string()],
        })
        .await?;
    create
        .handle(CreateEventCommand {
            host: session.user_id,
            title: "Retro".to_string(),
            schedule: MeetingSchedule::from_timestamp(now.add_days(-7), "45m"),
            invited: vec!["ana@example.com".to_string()],
        })
        .await?;

    // A cosmetic identity variant still reaches the stored participant.
    respond
        .handle(RespondToParticipantCommand {
            event_id: planning.id,
            identity: "Ana@Example.com ".to_string(),
            accept: true,
        })
        .await?;

    let board = dashboard
        .handle(GetDashboardQuery {
            user_id: session.user_id,
            now,
        })
        .await?;

    for bucket in Bucket::ALL {
        println!("{}:", bucket);
        for event in board.bucket(bucket) {
            println!(
                "  {} ({} participants, {})",
                event.title,
                event.participants.len(),
                event.overall_status
            );
        }
    }

    Ok(())
}
