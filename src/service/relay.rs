//! Client-side relay used by the form trigger.
//!
//! Counterpart of the delivery endpoint: formats a form submission and forwards
//! it across the network boundary with the shared-secret bearer token. Also
//! exposes the health probe used to verify a deployment before wiring up the
//! form trigger.

use crate::{
    error::AppError,
    model::{
        api::{ErrorDto, HealthDto, SubmissionRequest, SubmissionResponse},
        embed::EmbedPayload,
        form::FormSubmission,
    },
    service::formatter,
};

/// HTTP client for the form-submission endpoint.
pub struct SubmissionRelay {
    http: reqwest::Client,
    base_url: String,
    api_secret: String,
}

impl SubmissionRelay {
    /// Creates a relay client for the given deployment.
    ///
    /// # Arguments
    /// - `base_url` - Endpoint base URL without trailing slash
    /// - `api_secret` - Shared secret, must match the endpoint's `API_SECRET`
    pub fn new(base_url: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Formats a form submission and forwards it to the delivery endpoint.
    pub async fn send(&self, submission: &FormSubmission) -> Result<SubmissionResponse, AppError> {
        self.send_embed(&formatter::format_submission(submission))
            .await
    }

    /// Forwards an already-built embed payload to the delivery endpoint.
    ///
    /// # Returns
    /// - `Ok(SubmissionResponse)` - Message posted; carries message and channel ids
    /// - `Err(AppError::InternalError)` - Endpoint rejected the request; message
    ///   carries the HTTP status and the server-reported error
    /// - `Err(AppError::HttpClientErr)` - Endpoint unreachable
    pub async fn send_embed(&self, embed: &EmbedPayload) -> Result<SubmissionResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/api/form-submission", self.base_url))
            .bearer_auth(&self.api_secret)
            .json(&SubmissionRequest {
                embed: Some(embed.clone()),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reported = response
                .json::<ErrorDto>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "unreadable error body".to_string());
            return Err(AppError::InternalError(format!(
                "Delivery endpoint returned {status}: {reported}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Probes the deployment's health endpoint.
    pub async fn check_health(&self) -> Result<HealthDto, AppError> {
        let response = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::InternalError(format!(
                "Health endpoint returned {status}"
            )));
        }

        Ok(response.json().await?)
    }
}
