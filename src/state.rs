//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. All fields use cheap-to-clone types:
//! the dispatcher is reference-counted and the secret is only cloned with the
//! state itself.

use std::sync::Arc;

use crate::service::dispatch::SubmissionDispatcher;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret the upstream form trigger must present as a bearer token.
    pub api_secret: String,

    /// Dispatcher that turns embed payloads into Discord messages.
    ///
    /// Held behind a trait object so request handlers stay independent of the
    /// Discord client; tests substitute a recording stub.
    pub dispatcher: Arc<dyn SubmissionDispatcher>,
}

impl AppState {
    pub fn new(api_secret: String, dispatcher: Arc<dyn SubmissionDispatcher>) -> Self {
        Self {
            api_secret,
            dispatcher,
        }
    }
}
