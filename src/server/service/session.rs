use dioxus_logger::tracing;
use std::future::Future;

use crate::server::{
    data::{session_vote::SessionVoteRepository, store::JsonStore},
    error::{vote::VoteError, AppError},
    model::{opaque_id::OpaqueId, session_vote::SessionVote, vote::VoteToggle},
    service::embed::session_vote_description,
};

/// Acknowledgement shown to a member who pressed the session vote button.
pub const TOGGLE_ACK: &str = "Your vote was toggled.";

/// Session vote lifecycle: open, toggle, consume.
pub struct SessionService<'a> {
    store: &'a JsonStore,
}

impl<'a> SessionService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Opens a new session vote hosted by `host_id`.
    ///
    /// The vote exists before its message does; call [`Self::attach_message`] once the
    /// message is posted, or [`Self::discard_vote`] if posting fails.
    ///
    /// # Returns
    /// - `Ok(SessionVote)` - Open vote with a freshly minted id and no voters
    /// - `Err(VoteError::VoteInProgress)` - An unconsumed vote already exists
    pub async fn open_vote(&self, host_id: u64) -> Result<SessionVote, AppError> {
        let vote = SessionVote::new(OpaqueId::mint(), host_id, session_vote_description(host_id));
        let vote = SessionVoteRepository::new(self.store).create(vote).await?;

        tracing::info!("Session vote {} opened by {}", vote.id, host_id);

        Ok(vote)
    }

    /// Records the message carrying the vote button.
    ///
    /// A vote consumed or replaced while its message was being posted is not an error for
    /// the host: the message is out, so this is logged and ignored.
    pub async fn attach_message(&self, vote_id: &OpaqueId, message_id: u64) -> Result<(), AppError> {
        match SessionVoteRepository::new(self.store)
            .attach_message(vote_id, message_id)
            .await
        {
            Err(AppError::VoteErr(VoteError::NoActiveVote)) => {
                tracing::warn!(
                    "Session vote {} was no longer active when message {} was posted",
                    vote_id,
                    message_id
                );
                Ok(())
            }
            result => result,
        }
    }

    /// Removes a vote whose message could not be posted, so it does not block new votes.
    pub async fn discard_vote(&self, vote_id: &OpaqueId) -> Result<(), AppError> {
        if SessionVoteRepository::new(self.store).discard(vote_id).await? {
            tracing::info!("Session vote {} discarded", vote_id);
        }

        Ok(())
    }

    /// Toggles `actor` in the vote identified by the pressed button.
    ///
    /// # Returns
    /// - `Ok((SessionVote, VoteToggle))` - Updated vote for re-rendering
    /// - `Err(VoteError::StaleVote)` - The button belongs to a vote that is no longer active
    pub async fn toggle_vote(
        &self,
        vote_id: &OpaqueId,
        actor: u64,
    ) -> Result<(SessionVote, VoteToggle), AppError> {
        let (vote, toggle) = SessionVoteRepository::new(self.store)
            .toggle_voter(vote_id, actor)
            .await?;

        tracing::debug!("Session vote {}: {} {:?}", vote.id, actor, toggle);

        Ok((vote, toggle))
    }

    /// Announces a session from the current vote, if any, and consumes the vote once the
    /// announcement went out.
    ///
    /// `announce` receives the voters in voting order. Starting a session without a vote is
    /// valid and announces no voters. When `announce` fails the vote stays in place so the
    /// host can retry without losing its voters.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Voters that were announced
    /// - `Err(AppError)` - `announce` failed; the vote is untouched
    pub async fn start_session<F, Fut>(&self, announce: F) -> Result<Vec<u64>, AppError>
    where
        F: FnOnce(Vec<u64>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let repo = SessionVoteRepository::new(self.store);
        let vote = repo.get().await;
        let voters = vote
            .as_ref()
            .map(|vote| vote.voters.clone())
            .unwrap_or_default();

        announce(voters.clone()).await?;

        match vote {
            Some(vote) => {
                repo.discard(&vote.id).await?;
                tracing::info!(
                    "Session started from vote {} with {} voters",
                    vote.id,
                    voters.len()
                );
            }
            None => tracing::info!("Session started without a vote"),
        }

        Ok(voters)
    }
}
