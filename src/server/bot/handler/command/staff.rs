//! Staff logging commands and the partnership requirements reply.
//!
//! Log channels are optional: when one is unset the command still succeeds and the post
//! is skipped.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use super::{card_message, options::CommandOptions, post};
use crate::server::{
    bot::notify,
    config::Channel,
    error::AppError,
    model::{
        card::Card,
        staff::{FeedbackParam, InfractionParam, PromotionParam, PunishmentParam},
    },
    service::embed::CardRenderer,
    state::AppState,
};

const DEFAULT_REASON: &str = "No reason provided";

/// Posts `card` to `channel` when the channel is configured.
async fn post_log(
    state: &AppState,
    ctx: &Context,
    channel: Channel,
    content: String,
    card: Card,
) -> Result<(), AppError> {
    let Some(channel_id) = state.config.channel(channel) else {
        tracing::warn!("{} not set, skipping log post", channel.env_var());
        return Ok(());
    };

    post(ctx, channel_id, card_message(content, card)).await?;

    Ok(())
}

pub async fn infraction(
    state: &AppState,
    ctx: &Context,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let target = options.user("target")?;

    let param = InfractionParam {
        target_id: target.id.get(),
        reason: options.string_or("reason", DEFAULT_REASON),
        kind: options.string_or("type", "Infraction"),
        revokable: options.string_or("revokable", ""),
    };
    let card = CardRenderer::new(&state.config).infraction(&param);

    post_log(
        state,
        ctx,
        Channel::Infraction,
        format!("<@{}>", param.target_id),
        card.clone(),
    )
    .await?;
    notify::direct_message(ctx, param.target_id, None, card.into_embeds()).await;

    tracing::info!("Infraction {} logged for {}", param.kind, param.target_id);

    Ok("Infraction logged.".to_string())
}

pub async fn promotion(
    state: &AppState,
    ctx: &Context,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let user = options.user("user")?;
    let rank = options.role("new_rank")?;

    let param = PromotionParam {
        user_id: user.id.get(),
        username: user.name.clone(),
        rank_name: rank.name.clone(),
        reason: options.string_or("reason", DEFAULT_REASON),
    };
    let card = CardRenderer::new(&state.config).promotion(&param);

    post_log(
        state,
        ctx,
        Channel::Promotion,
        format!("<@{}>", param.user_id),
        card.clone(),
    )
    .await?;
    notify::direct_message(ctx, param.user_id, None, card.into_embeds()).await;

    tracing::info!("Promotion of {} to {} logged", param.user_id, param.rank_name);

    Ok("Promotion logged.".to_string())
}

pub async fn punishment(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let user = options.user("user")?;

    let param = PunishmentParam {
        moderator_id: command.user.id.get(),
        user_id: user.id.get(),
        roblox_user: options.string_or("roblox_user", "N/A"),
        reason: options.string_or("reason", "N/A"),
        proof: options.string_or("proof", "N/A"),
    };
    let card = CardRenderer::new(&state.config).punishment(&param);

    post_log(state, ctx, Channel::Punishment, String::new(), card).await?;

    Ok("Punishment logged.".to_string())
}

pub async fn feedback(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let user = options.user("user")?;

    let param = FeedbackParam {
        reviewer_id: command.user.id.get(),
        staff_member_id: user.id.get(),
        rating: options.string_or("rating", "N/A"),
        feedback: options.string_or("feedback", "No feedback provided"),
    };
    let card = CardRenderer::new(&state.config).feedback(&param);

    post_log(state, ctx, Channel::Feedback, String::new(), card).await?;

    Ok("Feedback submitted.".to_string())
}

/// Replies publicly with the partnership requirements.
pub async fn partnerships_requirements(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let card = CardRenderer::new(&state.config).partnership_requirements();
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embeds(card.into_embeds()),
    );

    if let Err(e) = command.create_response(ctx, response).await {
        tracing::error!("Failed to answer /partnerships_requirements: {}", e);
    }
}
