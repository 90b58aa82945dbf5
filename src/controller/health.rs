use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Discord Form Relay";

/// GET /api/health
/// Deployment probe; always 200.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }),
    )
}
