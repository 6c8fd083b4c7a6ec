use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton, EditMessage,
};

use super::{card_message, options::CommandOptions, post};
use crate::server::{
    bot::notify,
    config::Channel,
    error::AppError,
    model::{
        interaction::InteractionId,
        suggestion::{SuggestionRecord, VoteDirection},
    },
    service::{embed::CardRenderer, suggestion::SuggestionService},
    state::AppState,
};

/// Vote buttons of the suggestion posted in `message_id`.
pub fn vote_buttons(message_id: u64) -> CreateActionRow {
    let button = |direction: VoteDirection, label: &str, style: ButtonStyle| {
        CreateButton::new(
            InteractionId::SuggestionVote {
                message_id,
                direction,
            }
            .encode(),
        )
        .label(label)
        .style(style)
    };

    CreateActionRow::Buttons(vec![
        button(VoteDirection::Up, "⬆ Upvote", ButtonStyle::Success),
        button(VoteDirection::Down, "⬇ Downvote", ButtonStyle::Danger),
    ])
}

/// Posts a suggestion, records its empty tally and opens a discussion thread.
///
/// The buttons are attached after posting because their ids carry the message id.
pub async fn suggestion(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    options: &CommandOptions<'_>,
) -> Result<String, AppError> {
    let channel_id = state.config.require_channel(Channel::Suggestion)?;
    let author = command.user.id.get();
    let text = options.string_or("suggestion", "No suggestion provided");

    let draft = SuggestionRecord::new(author, text.clone());
    let mut posted = post(
        ctx,
        channel_id,
        card_message(
            String::new(),
            CardRenderer::new(&state.config).suggestion(&draft, None),
        ),
    )
    .await?;
    let message_id = posted.id.get();

    SuggestionService::new(&state.store)
        .submit(message_id, author, text)
        .await?;

    posted
        .edit(
            ctx,
            EditMessage::new().components(vec![vote_buttons(message_id)]),
        )
        .await?;

    notify::discussion_thread(
        ctx,
        channel_id,
        message_id,
        format!("Suggestion - {}", command.user.display_name()),
    )
    .await;

    Ok("Suggestion submitted.".to_string())
}
