//! Domain model for the single active session vote.

use serde::{Deserialize, Serialize};

use super::{
    opaque_id::OpaqueId,
    vote::{toggle_membership, VoteToggle},
};
use crate::server::util::snowflake;

/// Poll gauging interest in starting a roleplay session.
///
/// At most one exists at a time. Buttons carry the vote's `id`, and a press is only applied
/// when that id matches the vote currently held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionVote {
    /// Token embedded in the vote button, minted at creation.
    pub id: OpaqueId,
    /// Discord ID of the member who opened the vote.
    #[serde(alias = "host", with = "snowflake::string_id")]
    pub host_id: u64,
    /// Whether the vote has been converted into a live session announcement.
    #[serde(default)]
    pub started: bool,
    /// Discord IDs of voters in the order they voted.
    #[serde(default, with = "snowflake::string_ids")]
    pub voters: Vec<u64>,
    /// Display text frozen when the vote was opened.
    #[serde(default)]
    pub description: String,
    /// Message carrying the vote button, attached once the message has been posted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "snowflake::option_string_id"
    )]
    pub message_id: Option<u64>,
}

impl SessionVote {
    /// Creates an open vote with no voters and no message yet.
    pub fn new(id: OpaqueId, host_id: u64, description: String) -> Self {
        Self {
            id,
            host_id,
            started: false,
            voters: Vec::new(),
            description,
            message_id: None,
        }
    }

    /// Whether the vote still blocks a new one from being opened.
    pub fn is_unconsumed(&self) -> bool {
        !self.started
    }

    /// Whether a button carrying `id` belongs to this vote.
    pub fn matches(&self, id: &OpaqueId) -> bool {
        &self.id == id
    }

    /// Adds or removes `actor` from the voter list.
    pub fn toggle_voter(&mut self, actor: u64) -> VoteToggle {
        toggle_membership(&mut self.voters, actor)
    }
}
