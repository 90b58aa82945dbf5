//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
///
/// Internal errors expose the underlying error message in the `details` field of the
/// response body. The endpoint has exactly one trusted caller (the form trigger
/// holding the shared secret), and that caller's execution log is the only place
/// delivery failures can be diagnosed from.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request failed bearer-token authentication.
    ///
    /// Results in 401 Unauthorized. Raised before any Discord work happens.
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// No destination channel configured for form submissions.
    ///
    /// Results in 500 Internal Server Error with a message naming the missing
    /// environment variable, matching the contract the upstream trigger checks for.
    #[error("FORM_SUBMISSION_CHANNEL_ID not configured in environment variables")]
    ChannelNotConfigured,

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error with the
    /// client error message in `details`.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    ///
    /// Raised by the relay client when the delivery endpoint is unreachable.
    #[error(transparent)]
    HttpClientErr(#[from] reqwest::Error),

    /// I/O error, e.g. failing to bind the listen address.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error with the message in `details`.
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

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and JSON error body.
/// Internal errors are logged with full details and additionally reported to the
/// caller through the `details` field.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 401 Unauthorized - For `Unauthorized` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            err @ Self::ChannelNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(err.to_string())),
            )
                .into_response(),
            Self::ConfigErr(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(err.to_string())),
            )
                .into_response(),
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_details(
                        "Internal server error".to_string(),
                        err.to_string(),
                    )),
                )
                    .into_response()
            }
        }
    }
}
