//! Button presses routed through [`InteractionId`].
//!
//! Ids that do not parse are ignored without a response. Every other press is answered
//! with an ephemeral acknowledgement, or with [`AppError::user_message`] when rejected.

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, EditMessage,
};

use crate::server::{
    bot::notify,
    error::AppError,
    middleware::auth::CapabilityGuard,
    model::{
        interaction::{InteractionId, REQUEST_PROCESSED},
        opaque_id::OpaqueId,
        permission::Capability,
        request::{RequestDecision, RequestKind},
        suggestion::VoteDirection,
    },
    service::{
        embed::CardRenderer,
        request::{
            decision_ack, decision_footer, decision_notice, requester_from_fields, PROCESSED_LABEL,
        },
        session::{SessionService, TOGGLE_ACK},
        suggestion::{vote_ack, SuggestionService},
    },
    state::AppState,
};

pub async fn handle_component(state: &AppState, ctx: Context, component: ComponentInteraction) {
    let Some(id) = InteractionId::parse(&component.data.custom_id) else {
        tracing::debug!("Ignoring component {}", component.data.custom_id);
        return;
    };

    let result = match id {
        InteractionId::SessionVoteToggle { vote_id } => {
            session_vote_toggle(state, &ctx, &component, &vote_id).await
        }
        InteractionId::SuggestionVote {
            message_id,
            direction,
        } => suggestion_vote(state, &ctx, &component, message_id, direction).await,
        InteractionId::RequestAction {
            kind,
            request_id,
            decision,
        } => request_action(state, &ctx, &component, kind, &request_id, decision).await,
    };

    let reply = match result {
        Ok(ack) => ack,
        Err(e) => e.user_message(),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply)
            .ephemeral(true),
    );
    if let Err(e) = component.create_response(&ctx, response).await {
        tracing::error!(
            "Failed to answer component {}: {}",
            component.data.custom_id,
            e
        );
    }
}

/// Replaces the embeds of the pressed message, logging rather than failing on error.
///
/// The vote is already persisted at this point, so the next press re-renders it anyway.
async fn rerender(ctx: &Context, component: &ComponentInteraction, embeds: Vec<CreateEmbed>) {
    let message = &component.message;

    if let Err(e) = message
        .channel_id
        .edit_message(ctx, message.id, EditMessage::new().embeds(embeds))
        .await
    {
        tracing::error!("Failed to re-render message {}: {}", message.id, e);
    }
}

async fn session_vote_toggle(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    vote_id: &OpaqueId,
) -> Result<String, AppError> {
    let (vote, _) = SessionService::new(&state.store)
        .toggle_vote(vote_id, component.user.id.get())
        .await?;

    let card = CardRenderer::new(&state.config).session_vote(&vote);
    rerender(ctx, component, card.into_embeds()).await;

    Ok(TOGGLE_ACK.to_string())
}

async fn suggestion_vote(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    message_id: u64,
    direction: VoteDirection,
) -> Result<String, AppError> {
    let (record, toggle) = SuggestionService::new(&state.store)
        .vote(message_id, component.user.id.get(), direction)
        .await?;

    // Records created lazily by a vote carry no text; reuse what the message shows.
    let shown_text = component
        .message
        .embeds
        .iter()
        .flat_map(|embed| embed.fields.iter())
        .find(|field| field.name.eq_ignore_ascii_case("Suggestion"))
        .map(|field| field.value.as_str());

    let card = CardRenderer::new(&state.config).suggestion(&record, shown_text);
    rerender(ctx, component, card.into_embeds()).await;

    Ok(vote_ack(direction, toggle).to_string())
}

async fn request_action(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    kind: RequestKind,
    request_id: &OpaqueId,
    decision: RequestDecision,
) -> Result<String, AppError> {
    CapabilityGuard::new(&state.config)
        .require(component.member.as_ref(), &[Capability::Staff])?;

    let actor_tag = component.user.tag();
    let message = &component.message;

    let last = message.embeds.len().saturating_sub(1);
    let embeds: Vec<CreateEmbed> = message
        .embeds
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, embed)| {
            let embed = CreateEmbed::from(embed);
            if index == last {
                embed.footer(CreateEmbedFooter::new(decision_footer(decision, &actor_tag)))
            } else {
                embed
            }
        })
        .collect();

    let processed = CreateActionRow::Buttons(vec![CreateButton::new(REQUEST_PROCESSED)
        .label(PROCESSED_LABEL)
        .style(ButtonStyle::Secondary)
        .disabled(true)]);

    message
        .channel_id
        .edit_message(
            ctx,
            message.id,
            EditMessage::new().embeds(embeds).components(vec![processed]),
        )
        .await?;

    tracing::info!(
        "{} request {} {} by {}",
        kind.label(),
        request_id,
        decision.past_tense(),
        actor_tag
    );

    let requester = requester_from_fields(
        message
            .embeds
            .iter()
            .flat_map(|embed| embed.fields.iter())
            .map(|field| (field.name.as_str(), field.value.as_str())),
    );
    match requester {
        Some(requester) => {
            notify::direct_message(
                ctx,
                requester,
                Some(decision_notice(decision, &actor_tag)),
                Vec::new(),
            )
            .await;
        }
        None => tracing::warn!("No requester found on {} request {}", kind.label(), request_id),
    }

    Ok(decision_ack(decision))
}
