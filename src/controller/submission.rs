use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::{SubmissionRequest, SubmissionResponse},
    state::AppState,
};

/// POST /api/form-submission
/// Authenticates the form trigger and relays the submission embed to Discord.
///
/// The bearer check runs before the body is inspected, so an unauthorized
/// request never reaches the Discord client regardless of what it carries.
///
/// # Returns
/// - 200 - Message posted; body carries `messageId` and `channelId`
/// - 400 - Body is not valid JSON or has no embed
/// - 401 - Missing or mismatched bearer token
/// - 404 - Configured channel unknown to Discord
/// - 500 - Channel not configured, or any Discord client failure
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.api_secret).require_bearer(&headers)?;

    let Json(request) =
        body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let embed = request
        .embed
        .ok_or_else(|| AppError::BadRequest("No embed data provided".to_string()))?;

    let receipt = state.dispatcher.dispatch(&embed).await?;

    Ok((
        StatusCode::OK,
        Json(SubmissionResponse {
            success: true,
            message_id: receipt.message_id,
            channel_id: receipt.channel_id,
        }),
    ))
}
