//! Interaction ids carried by message buttons.
//!
//! A button's custom id is the only link between a rendered control and the state it acts
//! on, so every id is built and read through [`InteractionId::encode`] and
//! [`InteractionId::parse`]. The wire form is `<kind>:<entity>[:<action>]`.

use super::{
    opaque_id::OpaqueId,
    request::{RequestDecision, RequestKind},
    suggestion::VoteDirection,
};

/// Separator between the segments of an interaction id.
pub const DELIMITER: char = ':';

const SESSION_VOTE_TOGGLE: &str = "session_vote_toggle";
const SUGGESTION_VOTE: &str = "suggestion_vote";

/// Custom id of the disabled button left on processed staff requests.
pub const REQUEST_PROCESSED: &str = "request_processed";

/// Custom id of the disabled member counter on welcome messages.
pub const MEMBER_COUNT: &str = "member_count";

/// Decoded button interaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionId {
    /// Toggle the pressing member in the active session vote.
    SessionVoteToggle { vote_id: OpaqueId },
    /// Cast an up/down vote on the suggestion posted in `message_id`.
    SuggestionVote {
        message_id: u64,
        direction: VoteDirection,
    },
    /// Approve or deny a staff request.
    RequestAction {
        kind: RequestKind,
        request_id: OpaqueId,
        decision: RequestDecision,
    },
}

impl InteractionId {
    /// Renders the id into its wire form.
    pub fn encode(&self) -> String {
        match self {
            Self::SessionVoteToggle { vote_id } => {
                format!("{SESSION_VOTE_TOGGLE}{DELIMITER}{vote_id}")
            }
            Self::SuggestionVote {
                message_id,
                direction,
            } => format!("{SUGGESTION_VOTE}{DELIMITER}{message_id}{DELIMITER}{direction}"),
            Self::RequestAction {
                kind,
                request_id,
                decision,
            } => format!(
                "{}{DELIMITER}{request_id}{DELIMITER}{}",
                kind.interaction_prefix(),
                decision.as_str()
            ),
        }
    }

    /// Reads an id from its wire form.
    ///
    /// # Returns
    /// - `Some(InteractionId)` - Well-formed id of a known kind
    /// - `None` - Unknown kind, wrong segment count or malformed segment; callers ignore it
    pub fn parse(value: &str) -> Option<Self> {
        let segments: Vec<&str> = value.split(DELIMITER).collect();

        match segments.as_slice() {
            [SESSION_VOTE_TOGGLE, vote_id] => Some(Self::SessionVoteToggle {
                vote_id: OpaqueId::parse(vote_id)?,
            }),
            [SUGGESTION_VOTE, message_id, direction] => Some(Self::SuggestionVote {
                message_id: message_id.parse().ok()?,
                direction: VoteDirection::parse(direction)?,
            }),
            [prefix, request_id, decision] => Some(Self::RequestAction {
                kind: RequestKind::from_interaction_prefix(prefix)?,
                request_id: OpaqueId::parse(request_id)?,
                decision: RequestDecision::parse(decision)?,
            }),
            _ => None,
        }
    }
}
