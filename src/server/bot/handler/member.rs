use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, ChannelId, Context, CreateActionRow, CreateButton, CreateMessage, GuildId, Member,
};

use crate::server::{
    config::Channel, error::AppError, model::interaction::MEMBER_COUNT,
    service::embed::welcome_content, state::AppState,
};

/// Welcome message with a disabled button showing the member count when known.
pub fn welcome_message(member_id: u64, member_count: Option<u64>) -> CreateMessage {
    let message = CreateMessage::new().content(welcome_content(member_id));

    match member_count {
        Some(count) => message.components(vec![CreateActionRow::Buttons(vec![
            CreateButton::new(MEMBER_COUNT)
                .label(format!("👥 {count}"))
                .style(ButtonStyle::Secondary)
                .disabled(true),
        ])]),
        None => message,
    }
}

/// Member count from the cache, falling back to the approximate count from the API.
async fn member_count(ctx: &Context, guild_id: GuildId) -> Option<u64> {
    if let Some(count) = ctx.cache.guild(guild_id).map(|guild| guild.member_count) {
        return Some(count);
    }

    match ctx.http.get_guild_with_counts(guild_id).await {
        Ok(guild) => guild.approximate_member_count,
        Err(e) => {
            tracing::warn!("Failed to fetch member count of guild {}: {}", guild_id, e);
            None
        }
    }
}

async fn welcome(state: &AppState, ctx: &Context, member: &Member) -> Result<(), AppError> {
    let Some(channel_id) = state.config.channel(Channel::Welcome) else {
        return Ok(());
    };

    let count = member_count(ctx, member.guild_id).await;
    ChannelId::new(channel_id)
        .send_message(ctx, welcome_message(member.user.id.get(), count))
        .await?;

    Ok(())
}

/// Handles a member joining by posting a best-effort welcome message.
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, member: Member) {
    if let Err(e) = welcome(state, &ctx, &member).await {
        tracing::warn!("Failed to welcome member {}: {}", member.user.id, e);
    }
}
