use dioxus_logger::tracing;
use std::time::Duration;

use crate::server::{config::Config, data::store::JsonStore, error::AppError};

/// Timeout applied to every outgoing HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the JSON store in the configured data directory.
///
/// Creates the directory and an empty document on first start. This function must
/// complete successfully before any handler can touch persisted state.
///
/// # Arguments
/// - `config` - Application configuration containing the data directory
///
/// # Returns
/// - `Ok(JsonStore)` - Store ready for use
/// - `Err(AppError::IoErr)` - Directory or initial document could not be created
pub async fn open_store(config: &Config) -> Result<JsonStore, AppError> {
    let store = JsonStore::open(&config.data_dir).await?;

    tracing::info!("Using store at {}", store.path().display());

    Ok(store)
}

/// Builds the HTTP client used for the upstream game-server API and the status API.
///
/// Redirects are disabled so that a compromised upstream cannot bounce requests, along
/// with their API key headers, to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}
