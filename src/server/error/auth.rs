use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::permission::Capability};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Actor does not hold the role backing the required capability.
    ///
    /// Raised by the bot's capability gate before any state is touched. Only ever
    /// surfaced to the actor as an ephemeral notice.
    #[error("Member {0} lacks the {1} capability")]
    MissingCapability(u64, Capability),

    /// Status API request carried no `Authorization` header or the wrong key.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or invalid API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidApiKey` → 401 Unauthorized with "Unauthorized"
/// - `MissingCapability` → 403 Forbidden; the status API never raises it, but the mapping
///   keeps the conversion total
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::MissingCapability(..) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
