use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, status::ServerStatusDto},
    server::{error::AppError, service::status::StatusService, state::AppState},
};

pub static STATUS_TAG: &str = "status";

/// Live game-server status.
///
/// Never fails because of the upstream: an unreachable or misconfigured upstream yields
/// the static fallback status.
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Current server status", body = ServerStatusDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.http_client, &state.config.status_api)
        .current()
        .await;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
