use crate::server::{
    data::store::JsonStore,
    error::{vote::VoteError, AppError},
    model::{opaque_id::OpaqueId, session_vote::SessionVote, vote::VoteToggle},
};

/// Repository for the single session vote held in the store.
pub struct SessionVoteRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> SessionVoteRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the current vote, if any.
    pub async fn get(&self) -> Option<SessionVote> {
        self.store.load().await.session_vote
    }

    /// Stores `vote` as the active vote.
    ///
    /// # Returns
    /// - `Ok(SessionVote)` - The stored vote
    /// - `Err(VoteError::VoteInProgress)` - An unconsumed vote already exists
    pub async fn create(&self, vote: SessionVote) -> Result<SessionVote, AppError> {
        self.store
            .update(|document| {
                if document
                    .session_vote
                    .as_ref()
                    .is_some_and(SessionVote::is_unconsumed)
                {
                    return Err(VoteError::VoteInProgress.into());
                }

                document.session_vote = Some(vote.clone());
                Ok(vote)
            })
            .await
    }

    /// Records the id of the message carrying the vote button.
    ///
    /// # Returns
    /// - `Ok(())` - Message id attached
    /// - `Err(VoteError::NoActiveVote)` - The vote was consumed or replaced before its
    ///   message was posted
    pub async fn attach_message(&self, vote_id: &OpaqueId, message_id: u64) -> Result<(), AppError> {
        self.store
            .update(|document| match document.session_vote.as_mut() {
                Some(vote) if vote.matches(vote_id) => {
                    vote.message_id = Some(message_id);
                    Ok(())
                }
                _ => Err(VoteError::NoActiveVote.into()),
            })
            .await
    }

    /// Toggles `actor` in the voters of the vote identified by `vote_id`.
    ///
    /// # Returns
    /// - `Ok((SessionVote, VoteToggle))` - Updated vote and whether the vote was cast or retracted
    /// - `Err(VoteError::StaleVote)` - No vote exists or `vote_id` belongs to an older vote
    pub async fn toggle_voter(
        &self,
        vote_id: &OpaqueId,
        actor: u64,
    ) -> Result<(SessionVote, VoteToggle), AppError> {
        self.store
            .update(|document| match document.session_vote.as_mut() {
                Some(vote) if vote.matches(vote_id) => {
                    let toggle = vote.toggle_voter(actor);
                    Ok((vote.clone(), toggle))
                }
                _ => Err(VoteError::StaleVote.into()),
            })
            .await
    }

    /// Removes the vote identified by `vote_id`, leaving any other vote in place.
    ///
    /// Used to roll back a vote whose message could not be posted.
    ///
    /// # Returns
    /// - `Ok(true)` - The vote was removed
    /// - `Ok(false)` - The current vote is a different one, or there is none
    pub async fn discard(&self, vote_id: &OpaqueId) -> Result<bool, AppError> {
        self.store
            .update(|document| {
                if document
                    .session_vote
                    .as_ref()
                    .is_some_and(|vote| vote.matches(vote_id))
                {
                    document.session_vote = None;
                    return Ok(true);
                }

                Ok(false)
            })
            .await
    }
}
