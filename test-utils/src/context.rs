use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// File name the bot uses for its store document.
pub const STORE_FILE_NAME: &str = "sessions.json";

/// Test context owning a temporary data directory.
///
/// The directory and everything in it is deleted when the context is dropped, so each
/// test runs against an isolated store.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a context with a fresh, empty data directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready for use
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Directory to open the store in.
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the store document inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join(STORE_FILE_NAME)
    }

    /// Reads the store document as written to disk.
    ///
    /// Used to assert on the persisted layout independently of the bot's own types.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed document
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_document(&self) -> Result<Value, TestError> {
        let bytes = std::fs::read(self.store_path())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
