//! Error types, user-facing notices and HTTP response handling.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Bot handlers turn it into an
//! ephemeral notice with [`AppError::user_message`], and the status API turns it into an
//! HTTP response through `IntoResponse`.

pub mod auth;
pub mod config;
pub mod internal;
pub mod vote;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError, vote::VoteError},
};

/// Notice shown to an actor when a collaborator failure interrupts a command.
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong while processing.";

/// Notice shown to an actor who lacks the capability a command requires.
pub const PERMISSION_DENIED_NOTICE: &str = "You do not have permission to perform this action.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic error conversion. Domain rejections (`ConfigErr` for unset
/// roles/channels, `AuthErr`, `VoteErr`) are expected outcomes shown verbatim to the actor,
/// while collaborator failures are logged and collapsed into a generic notice.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or at the point an unset role/channel is needed.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for HTTP status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected session vote transition (vote in progress, stale button).
    #[error(transparent)]
    VoteErr(#[from] VoteError),

    /// Internal invariant violation, such as an unparsable stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Filesystem error while reading or writing the store.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Store document could not be serialized.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the upstream game-server API or the status API cannot be reached.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Invalid request error.
    ///
    /// Raised when a command arrives without an option it needs. Results in 400 Bad
    /// Request with the provided error message, and is shown verbatim to the actor.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text of the ephemeral notice shown to the actor whose interaction failed.
    ///
    /// Configuration, authorization and stale-reference rejections are reported verbatim.
    /// Every other error is logged here and replaced with a generic notice so that
    /// collaborator details never reach Discord.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigErr(
                err @ (ConfigError::RoleNotConfigured(_) | ConfigError::ChannelNotConfigured(_)),
            ) => err.to_string(),
            Self::AuthErr(AuthError::MissingCapability(..)) => {
                PERMISSION_DENIED_NOTICE.to_string()
            }
            Self::VoteErr(err) => err.to_string(),
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("Interaction failed: {}", err);
                GENERIC_FAILURE_NOTICE.to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
