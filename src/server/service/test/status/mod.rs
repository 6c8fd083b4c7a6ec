use axum::{http::HeaderMap, routing::get, Json, Router};
use std::time::Duration;
use url::Url;

use crate::{
    model::status::ServerStatusDto,
    server::{
        config::StatusApiConfig,
        model::status::{FALLBACK_SERVER_NAME, QUICK_JOIN_PREFIX},
        service::status::{StatusReport, StatusService},
    },
};

mod current;
mod fetch_published;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

/// URL of a local port nothing listens on.
async fn closed_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn config(upstream_url: Url, token: Option<&str>) -> StatusApiConfig {
    StatusApiConfig {
        api_key: Some("secret".to_string()),
        port: 0,
        api_base_url: upstream_url.clone(),
        upstream_url,
        upstream_server_token: token.map(str::to_string),
        upstream_global_token: None,
    }
}
