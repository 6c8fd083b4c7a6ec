//! Application state shared by the gateway handlers and the HTTP API.
//!
//! The state is initialized once during startup and cloned into the bot's event handler
//! and into each request handler through Axum's state extraction. All fields are cheap to
//! clone:
//! - `Arc<Config>` shares the loaded configuration
//! - `JsonStore` shares one document lock across all clones
//! - `reqwest::Client` uses an `Arc` internally

use std::sync::Arc;

use super::{config::Config, data::store::JsonStore};

#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Persisted session vote and suggestion state.
    pub store: JsonStore,

    /// HTTP client for the upstream game-server API and the status API itself.
    ///
    /// Configured with a 5 second timeout so a slow upstream cannot stall a handler.
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    /// - `store` - Opened JSON store
    /// - `http_client` - HTTP client for external API requests
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, store: JsonStore, http_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            store,
            http_client,
        }
    }
}
