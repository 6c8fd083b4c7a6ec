use dioxus_logger::tracing;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::{error::AppError, model::store::StoreDocument};

/// File name of the store document inside the data directory.
pub const STORE_FILE_NAME: &str = "sessions.json";

/// Handle to the JSON document holding all persisted bot state.
///
/// Clones share one lock, so every `update` across all handlers runs its
/// load→mutate→save cycle as a single critical section.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Opens the store in `data_dir`, creating the directory and a default document if absent.
    ///
    /// # Arguments
    /// - `data_dir` - Directory holding `sessions.json`
    ///
    /// # Returns
    /// - `Ok(JsonStore)` - Store ready for use
    /// - `Err(AppError::IoErr)` - Directory or initial document could not be created
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await?;

        let store = Self {
            inner: Arc::new(StoreInner {
                path: data_dir.join(STORE_FILE_NAME),
                lock: Mutex::new(()),
            }),
        };

        if !tokio::fs::try_exists(store.path()).await? {
            tracing::info!("Creating store document at {}", store.path().display());
            store.write_document(&StoreDocument::default()).await?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Reads the current document.
    ///
    /// Never fails: a missing, unreadable or unparseable file yields the default document.
    pub async fn load(&self) -> StoreDocument {
        let _guard = self.inner.lock.lock().await;
        self.read_document().await
    }

    /// Overwrites the whole document.
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(AppError::IoErr | AppError::JsonErr)` - Serialization or write failed; the
    ///   previous document is left intact
    pub async fn save(&self, document: &StoreDocument) -> Result<(), AppError> {
        let _guard = self.inner.lock.lock().await;
        self.write_document(document).await
    }

    /// Runs `mutate` against the current document and persists the result.
    ///
    /// The document is only written when `mutate` succeeds, so a rejected transition leaves
    /// the store untouched.
    ///
    /// # Arguments
    /// - `mutate` - Transition to apply; its error aborts the update
    ///
    /// # Returns
    /// - `Ok(T)` - Value returned by `mutate` after the document was saved
    /// - `Err(AppError)` - Error from `mutate`, or a write failure
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut StoreDocument) -> Result<T, AppError>,
    {
        let _guard = self.inner.lock.lock().await;

        let mut document = self.read_document().await;
        let result = mutate(&mut document)?;
        self.write_document(&document).await?;

        Ok(result)
    }

    async fn read_document(&self) -> StoreDocument {
        let bytes = match tokio::fs::read(self.path()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    "Failed to read store {}, using empty document: {}",
                    self.path().display(),
                    e
                );
                return StoreDocument::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    "Failed to parse store {}, using empty document: {}",
                    self.path().display(),
                    e
                );
                StoreDocument::default()
            }
        }
    }

    /// Writes to a sibling temp file then renames it over the document.
    async fn write_document(&self, document: &StoreDocument) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp_path = self.path().with_extension("json.tmp");

        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, self.path()).await?;

        Ok(())
    }
}
