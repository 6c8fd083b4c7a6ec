//! Prefix commands read from guild messages.

use dioxus_logger::tracing;
use serenity::all::{Context, CreateMessage, Message};

use crate::server::{
    error::AppError,
    middleware::auth::CapabilityGuard,
    model::permission::Capability,
    service::{
        embed::{CardRenderer, STATUS_FAILURE_NOTICE},
        status::{StatusReport, StatusService},
    },
    state::AppState,
};

const SAY_PREFIX: &str = "!say";
const SESSIONS_COMMAND: &str = "!sessions";

/// Prefix command carried by a message.
#[derive(Debug, PartialEq, Eq)]
pub enum PrefixCommand<'a> {
    /// Repost the text as the bot.
    Say(&'a str),
    /// Post the live-session summary.
    Sessions,
}

impl<'a> PrefixCommand<'a> {
    pub fn parse(content: &'a str) -> Option<Self> {
        let content = content.trim();

        if content == SESSIONS_COMMAND {
            return Some(Self::Sessions);
        }

        let text = content.strip_prefix(SAY_PREFIX)?;
        if !text.is_empty() && !text.starts_with(char::is_whitespace) {
            return None;
        }
        let text = text.trim();

        (!text.is_empty()).then_some(Self::Say(text))
    }
}

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    // Only guild messages from people
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let Some(command) = PrefixCommand::parse(&message.content) else {
        return;
    };

    let result = match command {
        PrefixCommand::Say(text) => say(state, &ctx, &message, text).await,
        PrefixCommand::Sessions => sessions(state, &ctx, &message).await,
    };

    if let Err(e) = result {
        tracing::error!("Prefix command in channel {} failed: {}", message.channel_id, e);
    }
}

/// Reposts `text` and deletes the original; members without the echo role are ignored.
async fn say(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    text: &str,
) -> Result<(), AppError> {
    let roles: Vec<u64> = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();
    let actor = (message.author.id.get(), roles.as_slice());

    if let Err(e) = CapabilityGuard::new(&state.config).require(Some(&actor), &[Capability::Echo]) {
        tracing::debug!("Ignoring !say: {}", e);
        return Ok(());
    }

    message.channel_id.say(ctx, text).await?;
    message.delete(ctx).await?;

    Ok(())
}

/// Posts the live-session summary fetched from the status API.
async fn sessions(state: &AppState, ctx: &Context, message: &Message) -> Result<(), AppError> {
    let report = StatusService::new(&state.http_client, &state.config.status_api)
        .fetch_published()
        .await;

    let reply = match report {
        Ok(StatusReport::Live(status)) => CreateMessage::new()
            .embeds(CardRenderer::new(&state.config).live_session(&status).into_embeds()),
        Ok(StatusReport::Rejected(rejection)) => {
            CreateMessage::new().content(format!("❌ API Error: {}", rejection.error))
        }
        Err(e) => {
            tracing::warn!("Failed to fetch session status: {}", e);
            CreateMessage::new().content(STATUS_FAILURE_NOTICE)
        }
    };

    message.channel_id.send_message(ctx, reply).await?;

    Ok(())
}
