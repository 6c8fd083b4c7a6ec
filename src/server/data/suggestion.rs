use crate::server::{
    data::store::JsonStore,
    error::AppError,
    model::{
        suggestion::{SuggestionRecord, VoteDirection},
        vote::VoteToggle,
    },
};

/// Repository for suggestion tallies keyed by suggestion message id.
pub struct SuggestionRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> SuggestionRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Stores a freshly submitted suggestion, replacing any record under the same id.
    pub async fn create(
        &self,
        message_id: u64,
        record: SuggestionRecord,
    ) -> Result<SuggestionRecord, AppError> {
        self.store
            .update(|document| {
                document
                    .suggestions
                    .insert(message_id.to_string(), record.clone());
                Ok(record)
            })
            .await
    }

    /// Casts or retracts `actor`'s vote on the suggestion posted in `message_id`.
    ///
    /// Unknown suggestions are initialised with an empty tally before the vote is applied.
    ///
    /// # Returns
    /// - `Ok((SuggestionRecord, VoteToggle))` - Updated tally and whether the vote was cast
    ///   or retracted
    /// - `Err(AppError)` - The document could not be written
    pub async fn cast_vote(
        &self,
        message_id: u64,
        actor: u64,
        direction: VoteDirection,
    ) -> Result<(SuggestionRecord, VoteToggle), AppError> {
        self.store
            .update(|document| {
                let record = document.suggestion_entry(message_id);
                let toggle = record.cast(actor, direction);
                Ok((record.clone(), toggle))
            })
            .await
    }
}
