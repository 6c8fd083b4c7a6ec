use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or seeded document could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Seeded document could not be serialized or the store could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
