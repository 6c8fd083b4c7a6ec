use thiserror::Error;

/// Rejections of session vote transitions.
///
/// These are expected outcomes of stale buttons and repeated commands, reported to the
/// actor as ephemeral notices and never logged as failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoteError {
    /// A vote was opened but not yet consumed by `/session_start`.
    #[error("There is already a session vote happening. Please use `/session_start` to start/reset it first.")]
    VoteInProgress,

    /// The pressed button belongs to a vote that is no longer the active one.
    #[error("This session vote is no longer active.")]
    StaleVote,

    /// The vote to update no longer exists.
    #[error("There is no active session vote.")]
    NoActiveVote,
}
