use dioxus_logger::tracing;

use crate::server::{
    data::{store::JsonStore, suggestion::SuggestionRepository},
    error::AppError,
    model::{
        suggestion::{SuggestionRecord, VoteDirection},
        vote::VoteToggle,
    },
};

pub struct SuggestionService<'a> {
    store: &'a JsonStore,
}

impl<'a> SuggestionService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Records a suggestion posted in `message_id` with an empty tally.
    pub async fn submit(
        &self,
        message_id: u64,
        author: u64,
        text: String,
    ) -> Result<SuggestionRecord, AppError> {
        let record = SuggestionRepository::new(self.store)
            .create(message_id, SuggestionRecord::new(author, text))
            .await?;

        tracing::info!("Suggestion {} submitted by {}", message_id, author);

        Ok(record)
    }

    /// Casts or retracts `actor`'s vote; unknown suggestions start from an empty tally.
    pub async fn vote(
        &self,
        message_id: u64,
        actor: u64,
        direction: VoteDirection,
    ) -> Result<(SuggestionRecord, VoteToggle), AppError> {
        let (record, toggle) = SuggestionRepository::new(self.store)
            .cast_vote(message_id, actor, direction)
            .await?;

        tracing::debug!(
            "Suggestion {}: {} {} {:?}",
            message_id,
            actor,
            direction,
            toggle
        );

        Ok((record, toggle))
    }
}

/// Acknowledgement shown to the voter.
pub fn vote_ack(direction: VoteDirection, toggle: VoteToggle) -> &'static str {
    match (direction, toggle) {
        (VoteDirection::Up, VoteToggle::Cast) => "You upvoted this suggestion.",
        (VoteDirection::Down, VoteToggle::Cast) => "You downvoted this suggestion.",
        (VoteDirection::Up, VoteToggle::Retracted) => "You removed your upvote.",
        (VoteDirection::Down, VoteToggle::Retracted) => "You removed your downvote.",
    }
}
