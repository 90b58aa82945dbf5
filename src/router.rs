use axum::{
    http::{
        header::{HeaderName, ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE},
        Method, StatusCode,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    controller::{health::health, submission::submit_form},
    model::api::ErrorDto,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/form-submission",
            post(submit_form)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(health).options(preflight).fallback(method_not_allowed),
        )
        .layer(cors_layer())
}

/// CORS policy matching what the form trigger expects: any origin, the standard
/// method list, and the header allowlist the original deployment shipped with.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            ACCEPT,
            HeaderName::from_static("accept-version"),
            CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            CONTENT_TYPE,
            DATE,
            HeaderName::from_static("x-api-version"),
            AUTHORIZATION,
        ])
}

/// Answers CORS preflight with an empty 200 without touching any relay logic.
pub async fn preflight() -> impl IntoResponse {
    StatusCode::OK
}

/// JSON 405 for unsupported methods on known routes.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto::new("Method not allowed".to_string())),
    )
}
