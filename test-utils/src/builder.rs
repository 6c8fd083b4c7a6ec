use serde_json::Value;

use crate::{context::TestContext, error::TestError, fixture};

/// Contents written to the store file before the test starts.
enum Seed {
    Document(Value),
    Raw(String),
}

/// Builder for creating test contexts with a customizable store document.
///
/// Provides a fluent interface for seeding the data directory. Without any seed the
/// directory starts empty, as on a first deployment.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_session_vote(fixture::session_vote::builder().voters(&[1, 2]).build())
///     .with_suggestion(42, fixture::suggestion::json())
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    session_vote: Option<Value>,
    suggestions: Vec<(u64, Value)>,
    raw: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with nothing seeded.
    pub fn new() -> Self {
        Self {
            session_vote: None,
            suggestions: Vec::new(),
            raw: None,
        }
    }

    /// Seeds the document's `sessionVote`.
    ///
    /// # Arguments
    /// - `session_vote` - JSON value, usually from `fixture::session_vote`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_session_vote(mut self, session_vote: Value) -> Self {
        self.session_vote = Some(session_vote);
        self
    }

    /// Seeds a suggestion record under `message_id`.
    ///
    /// # Arguments
    /// - `message_id` - Suggestion message id used as the map key
    /// - `record` - JSON value, usually from `fixture::suggestion`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_suggestion(mut self, message_id: u64, record: Value) -> Self {
        self.suggestions.push((message_id, record));
        self
    }

    /// Seeds the store file with arbitrary bytes, e.g. a corrupt document.
    ///
    /// Takes precedence over any structured seed.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_document(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Builds the test context, writing the seeded document if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary data directory
    /// - `Err(TestError)` - Directory or seed could not be written
    pub async fn build(self) -> Result<TestContext, TestError> {
        let seed = match self.raw {
            Some(raw) => Some(Seed::Raw(raw)),
            None if self.session_vote.is_some() || !self.suggestions.is_empty() => Some(
                Seed::Document(fixture::document(self.session_vote, self.suggestions)),
            ),
            None => None,
        };

        let context = TestContext::new()?;

        match seed {
            Some(Seed::Document(document)) => {
                std::fs::write(context.store_path(), serde_json::to_vec_pretty(&document)?)?
            }
            Some(Seed::Raw(raw)) => std::fs::write(context.store_path(), raw)?,
            None => {}
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
