use super::CardRenderer;
use crate::server::model::{card::Card, suggestion::SuggestionRecord};

/// Placeholder shown when a suggestion's text is unknown.
const MISSING_TEXT: &str = "—";

impl CardRenderer<'_> {
    /// Suggestion message with its current tally.
    ///
    /// `text` overrides the record's own text, for records created lazily by a vote that
    /// never stored it.
    pub fn suggestion(&self, record: &SuggestionRecord, text: Option<&str>) -> Card {
        let description = match record.author {
            Some(author) => format!("### New suggestion submitted by <@{author}>!"),
            None => "### New suggestion submitted!".to_string(),
        };
        let text = record
            .text
            .as_deref()
            .or(text)
            .unwrap_or(MISSING_TEXT)
            .to_string();

        self.card()
            .description(description)
            .field("Suggestion", text, false)
            .field("Upvotes", record.upvotes().to_string(), true)
            .field("Downvotes", record.downvotes().to_string(), true)
    }
}
