//! The persisted store document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{session_vote::SessionVote, suggestion::SuggestionRecord};

/// Whole-bot mutable state, persisted as one JSON document.
///
/// Suggestion records are keyed by the decimal id of the message they are attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    #[serde(default)]
    pub session_vote: Option<SessionVote>,
    #[serde(default)]
    pub suggestions: BTreeMap<String, SuggestionRecord>,
}

impl StoreDocument {
    /// Returns the record for `message_id`, creating an empty tally when none exists.
    pub fn suggestion_entry(&mut self, message_id: u64) -> &mut SuggestionRecord {
        self.suggestions.entry(message_id.to_string()).or_default()
    }

    pub fn suggestion(&self, message_id: u64) -> Option<&SuggestionRecord> {
        self.suggestions.get(&message_id.to_string())
    }
}
