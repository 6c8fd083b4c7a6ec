use serde_json::Value;

pub const DEFAULT_AUTHOR_ID: u64 = 222222222222222222;
pub const DEFAULT_TEXT: &str = "Add a night-time patrol shift.";

/// Creates a suggestion record value with default values.
///
/// # Returns
/// - `Value` - Record with no votes
pub fn json() -> Value {
    builder().build()
}

/// Creates a suggestion record builder for customization.
///
/// # Returns
/// - `SuggestionBuilder` - Builder with default values
pub fn builder() -> SuggestionBuilder {
    SuggestionBuilder::default()
}

/// Builder for suggestion record values with customizable fields.
pub struct SuggestionBuilder {
    up: Vec<u64>,
    down: Vec<u64>,
    author: Option<u64>,
    text: Option<String>,
}

impl Default for SuggestionBuilder {
    fn default() -> Self {
        Self {
            up: Vec::new(),
            down: Vec::new(),
            author: Some(DEFAULT_AUTHOR_ID),
            text: Some(DEFAULT_TEXT.to_string()),
        }
    }
}

impl SuggestionBuilder {
    /// Sets the upvoters.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn up(mut self, up: &[u64]) -> Self {
        self.up = up.to_vec();
        self
    }

    /// Sets the downvoters.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn down(mut self, down: &[u64]) -> Self {
        self.down = down.to_vec();
        self
    }

    /// Drops author and text, as in records created by a vote on an unknown suggestion.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn anonymous(mut self) -> Self {
        self.author = None;
        self.text = None;
        self
    }

    /// Builds the value with ids written as decimal strings.
    ///
    /// # Returns
    /// - `Value` - Suggestion record in the persisted layout
    pub fn build(self) -> Value {
        let mut value = serde_json::json!({
            "up": self.up.iter().map(u64::to_string).collect::<Vec<_>>(),
            "down": self.down.iter().map(u64::to_string).collect::<Vec<_>>(),
        });

        if let Some(object) = value.as_object_mut() {
            if let Some(author) = self.author {
                object.insert("author".to_string(), Value::String(author.to_string()));
            }
            if let Some(text) = self.text {
                object.insert("text".to_string(), Value::String(text));
            }
        }

        value
    }
}
