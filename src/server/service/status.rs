//! Game-server status: upstream proxy for the HTTP API and its client for `!sessions`.

use chrono::Utc;
use dioxus_logger::tracing;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, status::ServerStatusDto},
    server::{
        config::StatusApiConfig,
        error::AppError,
        model::status::{ServerStatus, UpstreamPlayer, UpstreamServer},
    },
};

/// Body of a status API response as read by `!sessions`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusReport {
    Live(ServerStatusDto),
    Rejected(ErrorDto),
}

pub struct StatusService<'a> {
    http: &'a reqwest::Client,
    config: &'a StatusApiConfig,
}

impl<'a> StatusService<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a StatusApiConfig) -> Self {
        Self { http, config }
    }

    /// Current game-server snapshot.
    ///
    /// Never fails: without an upstream token, or when any upstream call fails, the static
    /// fallback snapshot is returned.
    pub async fn current(&self) -> ServerStatus {
        let now = Utc::now().timestamp_millis();

        let Some(token) = self.config.upstream_server_token.as_deref() else {
            return ServerStatus::fallback(now);
        };

        match self.fetch_upstream(token, now).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Upstream status unavailable, serving fallback: {}", e);
                ServerStatus::fallback(now)
            }
        }
    }

    async fn fetch_upstream(&self, token: &str, now: i64) -> Result<ServerStatus, AppError> {
        let server: UpstreamServer = self.upstream_get("server", token).await?;
        let players: Vec<UpstreamPlayer> = self.upstream_get("server/players", token).await?;
        let queue: serde_json::Value = self.upstream_get("server/queue", token).await?;

        Ok(ServerStatus::from_upstream(server, &players, &queue, now))
    }

    async fn upstream_get<T>(&self, path: &str, token: &str) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!(
            "{}/{path}",
            self.config.upstream_url.as_str().trim_end_matches('/')
        );

        let mut request = self.http.get(url).header("x-api-key", token);
        if let Some(global) = self.config.upstream_global_token.as_deref() {
            request = request.header("x-global-key", global);
        }

        Ok(request.send().await?.error_for_status()?.json().await?)
    }

    /// Reads the published status from this bot's own status API.
    ///
    /// # Returns
    /// - `Ok(StatusReport::Live)` - Status served
    /// - `Ok(StatusReport::Rejected)` - The API answered with an error body
    /// - `Err(AppError)` - The API could not be reached or returned an unreadable body
    pub async fn fetch_published(&self) -> Result<StatusReport, AppError> {
        let mut request = self.http.get(self.config.api_base_url.clone());
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.header(AUTHORIZATION, api_key);
        }

        Ok(request.send().await?.json().await?)
    }
}
