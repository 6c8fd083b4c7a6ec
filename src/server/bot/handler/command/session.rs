use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton,
};

use super::{card_message, post};
use crate::server::{
    config::Channel,
    error::AppError,
    model::interaction::InteractionId,
    service::{
        embed::{session_start_content, session_vote_content, CardRenderer},
        session::SessionService,
    },
    state::AppState,
};

const VOTE_BUTTON_LABEL: &str = "Vote for the session!";

/// Opens a session vote and posts its button.
///
/// The vote is stored before the message exists and rolled back if posting fails, so a
/// failed post never blocks the next `/session_vote`.
pub async fn session_vote(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::Session)?;
    let service = SessionService::new(&state.store);

    let vote = service.open_vote(command.user.id.get()).await?;

    let toggle = InteractionId::SessionVoteToggle {
        vote_id: vote.id.clone(),
    };
    let message = card_message(
        session_vote_content(&state.config.session_ping_role_ids),
        CardRenderer::new(&state.config).session_vote(&vote),
    )
    .components(vec![CreateActionRow::Buttons(vec![CreateButton::new(
        toggle.encode(),
    )
    .label(VOTE_BUTTON_LABEL)
    .style(ButtonStyle::Primary)])]);

    let posted = match post(ctx, channel_id, message).await {
        Ok(posted) => posted,
        Err(e) => {
            if let Err(discard_err) = service.discard_vote(&vote.id).await {
                tracing::error!("Failed to discard session vote {}: {}", vote.id, discard_err);
            }
            return Err(e);
        }
    };

    service.attach_message(&vote.id, posted.id.get()).await?;

    Ok("Session vote created and posted.".to_string())
}

/// Announces the session, pinging the voters of the current vote, then consumes the vote.
pub async fn session_start(state: &AppState, ctx: &Context) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::Session)?;

    SessionService::new(&state.store)
        .start_session(|voters| async move {
            let message = card_message(
                session_start_content(&state.config.session_ping_role_ids, &voters),
                CardRenderer::new(&state.config).session_started(),
            );
            post(ctx, channel_id, message).await.map(|_| ())
        })
        .await?;

    Ok("Session started and voters pinged (if any).".to_string())
}

pub async fn session_shutdown(state: &AppState, ctx: &Context) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::SessionShutdown)?;

    let message = card_message(
        String::new(),
        CardRenderer::new(&state.config).session_shutdown(),
    );
    post(ctx, channel_id, message).await?;

    tracing::info!("Session shutdown announced");

    Ok("Session shutdown posted.".to_string())
}
