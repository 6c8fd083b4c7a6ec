use chrono::Utc;
use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton,
};

use super::{card_message, options::CommandOptions, post};
use crate::server::{
    config::Channel,
    error::AppError,
    model::{
        card::Card,
        request::{FiftyFiftyRequestParam, LoaRequestParam, RequestDecision, RequestKind},
    },
    service::{embed::CardRenderer, request::request_actions},
    state::AppState,
};

const DEFAULT_REASON: &str = "No reason provided";

/// Approve and deny buttons of a new request.
fn action_row(kind: RequestKind) -> CreateActionRow {
    let buttons = request_actions(kind).map(|(decision, id)| {
        let style = match decision {
            RequestDecision::Approve => ButtonStyle::Success,
            RequestDecision::Deny => ButtonStyle::Danger,
        };

        CreateButton::new(id.encode())
            .label(decision.label())
            .style(style)
    });

    CreateActionRow::Buttons(buttons.into())
}

async fn submit(
    ctx: &Context,
    channel_id: u64,
    kind: RequestKind,
    card: Card,
) -> Result<String, AppError> {
    let message = card_message(String::new(), card).components(vec![action_row(kind)]);
    post(ctx, channel_id, message).await?;

    Ok(format!("{} request sent to staff.", kind.label()))
}

pub async fn fifty_fifty_request(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::FiftyFifty)?;

    let param = FiftyFiftyRequestParam {
        requester_id: command.user.id.get(),
        reason: options.string_or("reason", DEFAULT_REASON),
        submitted_at: Utc::now(),
    };
    let card = CardRenderer::new(&state.config).fifty_fifty_request(&param);

    submit(ctx, channel_id, RequestKind::FiftyFifty, card).await
}

pub async fn loa_request(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::Loa)?;

    let param = LoaRequestParam {
        requester_id: command.user.id.get(),
        starts_at: options.string_or("starts_at", "N/A"),
        ends_at: options.string_or("ends_at", "N/A"),
        reason: options.string_or("reason", DEFAULT_REASON),
    };
    let card = CardRenderer::new(&state.config).loa_request(&param);

    submit(ctx, channel_id, RequestKind::LeaveOfAbsence, card).await
}
