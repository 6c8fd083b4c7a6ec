mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{bot, config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let store = startup::open_store(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let api_port = config
        .status_api
        .api_key
        .is_some()
        .then_some(config.status_api.port);

    let state = AppState::new(config, store, http_client);

    tracing::info!("Starting server");

    // Initialize Discord bot
    let bot_client = bot::start::init_bot(&state.config, state.clone()).await?;

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let Some(port) = api_port else {
        tracing::info!("API_KEY not set, status API disabled");
        return bot_task
            .await
            .map_err(|e| AppError::InternalError(e.to_string()));
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Status API listening on {}", listener.local_addr()?);

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}
