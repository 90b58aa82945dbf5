use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::AppError;

/// Guard verifying the shared-secret bearer token on incoming requests.
///
/// The secret is compared by exact string equality against the full
/// `Authorization` header value; timing-attack resistance is out of scope since
/// the endpoint has a single trusted caller.
pub struct AuthGuard<'a> {
    api_secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(api_secret: &'a str) -> Self {
        Self { api_secret }
    }

    /// Requires a valid `Authorization: Bearer <secret>` header.
    ///
    /// # Returns
    /// - `Ok(())` - Header present and exactly matches the configured secret
    /// - `Err(AppError::Unauthorized)` - Header missing, malformed, or mismatched
    pub fn require_bearer(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let expected = format!("Bearer {}", self.api_secret);

        match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            Some(header) if header == expected => Ok(()),
            _ => Err(AppError::Unauthorized(
                "Unauthorized - Invalid API secret".to_string(),
            )),
        }
    }
}
