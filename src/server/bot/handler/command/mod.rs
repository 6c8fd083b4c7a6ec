//! Slash command dispatch.
//!
//! Every command except `partnerships_requirements` is deferred as an ephemeral response,
//! gated on its capability, run, and answered by editing the deferred response with either
//! the acknowledgement or [`AppError::user_message`].

pub mod options;

mod request;
mod session;
mod staff;
mod suggestion;

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateMessage, EditInteractionResponse, Message,
};

use crate::server::{
    bot::commands::SlashCommand, error::AppError, middleware::auth::CapabilityGuard,
    model::card::Card, state::AppState,
};

use options::CommandOptions;

pub async fn handle_command(state: &AppState, ctx: Context, command: CommandInteraction) {
    let Some(slash) = SlashCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown slash command {}", command.data.name);
        return;
    };

    if slash == SlashCommand::PartnershipsRequirements {
        staff::partnerships_requirements(state, &ctx, &command).await;
        return;
    }

    if let Err(e) = command.defer_ephemeral(&ctx).await {
        tracing::error!("Failed to defer /{}: {}", slash.name(), e);
        return;
    }

    let reply = match run(state, &ctx, &command, slash).await {
        Ok(ack) => ack,
        Err(e) => e.user_message(),
    };

    if let Err(e) = command
        .edit_response(&ctx, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::error!("Failed to answer /{}: {}", slash.name(), e);
    }
}

async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    slash: SlashCommand,
) -> Result<String, AppError> {
    if let Some(capability) = slash.capability() {
        CapabilityGuard::new(&state.config).require(command.member.as_deref(), &[capability])?;
    }

    let options = CommandOptions::new(command);

    match slash {
        SlashCommand::SessionVote => session::session_vote(state, ctx, command).await,
        SlashCommand::SessionStart => session::session_start(state, ctx).await,
        SlashCommand::SessionShutdown => session::session_shutdown(state, ctx).await,
        SlashCommand::Suggestion => {
            suggestion::suggestion(state, ctx, command, &options).await
        }
        SlashCommand::FiftyFiftyRequest => {
            request::fifty_fifty_request(state, ctx, command, &options).await
        }
        SlashCommand::LoaRequest => request::loa_request(state, ctx, command, &options).await,
        SlashCommand::Infraction => staff::infraction(state, ctx, &options).await,
        SlashCommand::Promotion => staff::promotion(state, ctx, &options).await,
        SlashCommand::Punishment => staff::punishment(state, ctx, command, &options).await,
        SlashCommand::Feedback => staff::feedback(state, ctx, command, &options).await,
        SlashCommand::PartnershipsRequirements => Ok(String::new()),
    }
}

/// Message carrying `card`, with `content` above it unless blank.
pub fn card_message(content: String, card: Card) -> CreateMessage {
    let message = CreateMessage::new().embeds(card.into_embeds());

    if content.is_empty() {
        message
    } else {
        message.content(content)
    }
}

/// Posts `message` to `channel_id`.
pub async fn post(
    ctx: &Context,
    channel_id: u64,
    message: CreateMessage,
) -> Result<Message, AppError> {
    Ok(ChannelId::new(channel_id).send_message(ctx, message).await?)
}
