//! Ready event handler for bot initialization.
//!
//! The ready event fires after every successful gateway handshake, including reconnects.
//! It registers the slash commands and starts the presence rotation, the latter only once
//! per process.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, GuildId, Ready};
use std::sync::atomic::Ordering;

use crate::server::{
    bot::{commands::SlashCommand, handler::Handler},
    error::AppError,
    scheduler::activity,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `handler` - Event handler holding the shared state
/// - `ctx` - Discord context used for registration and presence updates
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(e) = register_commands(&ctx, handler.state.config.discord_guild_id).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }

    if handler.presence_started.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = activity::start_presence_rotation(ctx.shard.clone()).await {
        tracing::error!("Failed to start presence rotation: {}", e);
        handler.presence_started.store(false, Ordering::SeqCst);
    }
}

/// Registers every slash command, scoped to `guild_id` when one is configured.
async fn register_commands(ctx: &Context, guild_id: Option<u64>) -> Result<(), AppError> {
    let definitions = SlashCommand::definitions();

    match guild_id {
        Some(guild_id) => {
            let registered = GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions)
                .await?;
            tracing::info!(
                "Registered {} slash commands in guild {}",
                registered.len(),
                guild_id
            );
        }
        None => {
            let registered = Command::set_global_commands(&ctx.http, definitions).await?;
            tracing::info!("Registered {} global slash commands", registered.len());
        }
    }

    Ok(())
}
