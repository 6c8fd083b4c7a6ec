use dioxus_logger::tracing;
use rand::Rng;
use serenity::all::{ActivityData, ShardMessenger};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::AppError;

/// Every ten seconds.
const PRESENCE_SCHEDULE: &str = "*/10 * * * * *";

/// Presence shown by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Playing(&'static str),
    Watching(&'static str),
}

impl Presence {
    pub fn activity(&self) -> ActivityData {
        match self {
            Self::Playing(name) => ActivityData::playing(*name),
            Self::Watching(name) => ActivityData::watching(*name),
        }
    }
}

pub const PRESENCES: [Presence; 4] = [
    Presence::Playing("Managing New York Roleplay"),
    Presence::Playing("New York Roleplay Bot"),
    Presence::Watching("Watching New York Roleplay"),
    Presence::Playing("discord.gg/pgmuEcW7Yz"),
];

/// Picks one entry of [`PRESENCES`] uniformly at random.
pub fn random_presence() -> Presence {
    PRESENCES[rand::rng().random_range(0..PRESENCES.len())]
}

/// Starts the presence rotation scheduler
///
/// Sets a random presence on the shard every ten seconds.
///
/// # Arguments
/// - `shard`: Messenger of the shard whose presence is rotated
pub async fn start_presence_rotation(shard: ShardMessenger) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(PRESENCE_SCHEDULE, move |_uuid, _lock| {
        let shard = shard.clone();
        let presence = random_presence();

        Box::pin(async move {
            tracing::debug!("Rotating presence to {:?}", presence);
            shard.set_activity(Some(presence.activity()));
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence rotation scheduler started");

    Ok(())
}
