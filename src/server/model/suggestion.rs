//! Domain model for suggestion vote tallies.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vote::{remove_member, toggle_membership, VoteToggle};
use crate::server::util::snowflake;

/// Direction of a suggestion vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Wire form used as the action segment of interaction ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up/down tally for one suggestion, keyed in the store by its message id.
///
/// An actor never appears in both `up` and `down`: casting one direction removes any prior
/// cast in the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    #[serde(default, with = "snowflake::string_ids")]
    pub up: Vec<u64>,
    #[serde(default, with = "snowflake::string_ids")]
    pub down: Vec<u64>,
    /// Submitter, absent for records created lazily by a vote on an unknown suggestion.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "snowflake::option_string_id"
    )]
    pub author: Option<u64>,
    /// Suggestion content frozen at submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SuggestionRecord {
    /// Creates an empty tally for a freshly submitted suggestion.
    pub fn new(author: u64, text: String) -> Self {
        Self {
            up: Vec::new(),
            down: Vec::new(),
            author: Some(author),
            text: Some(text),
        }
    }

    /// Casts or retracts `actor`'s vote in `direction`.
    ///
    /// A cast also removes the actor from the opposite direction.
    pub fn cast(&mut self, actor: u64, direction: VoteDirection) -> VoteToggle {
        let (same, opposite) = match direction {
            VoteDirection::Up => (&mut self.up, &mut self.down),
            VoteDirection::Down => (&mut self.down, &mut self.up),
        };

        let toggle = toggle_membership(same, actor);
        if toggle == VoteToggle::Cast {
            remove_member(opposite, actor);
        }

        toggle
    }

    pub fn upvotes(&self) -> usize {
        self.up.len()
    }

    pub fn downvotes(&self) -> usize {
        self.down.len()
    }
}
