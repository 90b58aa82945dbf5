//! Request and response DTOs for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::model::embed::EmbedPayload;

/// JSON error body returned for every failed request.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: String,
    /// Raw underlying error message, present on internal errors only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorDto {
    pub fn new(error: String) -> Self {
        Self {
            error,
            details: None,
        }
    }

    pub fn with_details(error: String, details: String) -> Self {
        Self {
            error,
            details: Some(details),
        }
    }
}

/// Body of `POST /api/form-submission`.
///
/// `embed` is optional so that an empty body deserializes and can be rejected
/// with a 400 instead of a serde-level error.
#[derive(Serialize, Deserialize, Debug)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub embed: Option<EmbedPayload>,
}

/// Successful submission response carrying the created Discord message.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message_id: String,
    pub channel_id: String,
}

/// Body of `GET /api/health`.
#[derive(Serialize, Deserialize, Debug)]
pub struct HealthDto {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub environment: String,
}
