use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Prefix tolerated in front of the API key.
const BEARER_PREFIX: &str = "Bearer ";

/// Rejects requests whose `Authorization` header does not carry the configured API key.
///
/// The header may hold the bare key or `Bearer <key>`. When no key is configured every
/// request is rejected, though the router is never served in that case.
///
/// # Returns
/// - `Ok(Response)` - Response of the inner handler
/// - `Err(AuthError::InvalidApiKey)` - Missing or wrong credential (401)
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.strip_prefix(BEARER_PREFIX).unwrap_or(value));

    match (state.config.status_api.api_key.as_deref(), provided) {
        (Some(expected), Some(provided)) if expected == provided => Ok(next.run(request).await),
        _ => Err(AuthError::InvalidApiKey.into()),
    }
}
