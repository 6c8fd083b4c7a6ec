//! Best-effort side effects.
//!
//! Direct messages and discussion threads are never part of the critical path of a
//! command: a failure is logged at `warn` and discarded, and the caller carries on as if it
//! had succeeded.

use dioxus_logger::tracing;
use serenity::all::{
    AutoArchiveDuration, CacheHttp, ChannelId, CreateEmbed, CreateMessage, CreateThread,
    MessageId, UserId,
};

/// Sends `content` (and optional embeds) to `user_id` in a direct message.
pub async fn direct_message(
    cache_http: impl CacheHttp,
    user_id: u64,
    content: Option<String>,
    embeds: Vec<CreateEmbed>,
) {
    let mut message = CreateMessage::new().embeds(embeds);
    if let Some(content) = content {
        message = message.content(content);
    }

    if let Err(e) = UserId::new(user_id)
        .direct_message(cache_http, message)
        .await
    {
        tracing::warn!("Failed to send direct message to {}: {}", user_id, e);
    }
}

/// Opens a public thread on `message_id` that archives after an hour of inactivity.
pub async fn discussion_thread(
    cache_http: impl CacheHttp,
    channel_id: u64,
    message_id: u64,
    name: String,
) {
    let builder = CreateThread::new(name).auto_archive_duration(AutoArchiveDuration::OneHour);

    if let Err(e) = ChannelId::new(channel_id)
        .create_thread_from_message(cache_http, MessageId::new(message_id), builder)
        .await
    {
        tracing::warn!(
            "Failed to create thread on message {} in channel {}: {}",
            message_id,
            channel_id,
            e
        );
    }
}
