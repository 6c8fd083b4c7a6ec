//! JSON fixtures for seeding the store document.
//!
//! Fixtures are plain `serde_json::Value`s in the persisted camelCase layout rather than the
//! bot's own model types, so store tests also pin down the on-disk format.

pub mod session_vote;
pub mod suggestion;

use serde_json::{Map, Value};

/// Assembles a whole store document.
///
/// # Arguments
/// - `session_vote` - Optional `sessionVote` value
/// - `suggestions` - Suggestion records keyed by message id
///
/// # Returns
/// - `Value` - Document with `sessionVote` and `suggestions` keys
pub fn document(session_vote: Option<Value>, suggestions: Vec<(u64, Value)>) -> Value {
    let suggestions: Map<String, Value> = suggestions
        .into_iter()
        .map(|(message_id, record)| (message_id.to_string(), record))
        .collect();

    serde_json::json!({
        "sessionVote": session_vote,
        "suggestions": suggestions,
    })
}
