//! Shared testing utilities.
//!
//! Provides a scriptable stand-in for the Discord dispatcher plus helpers for
//! building application state, sample submissions, and an in-process HTTP
//! server on an ephemeral port for end-to-end tests. No test here talks to
//! Discord or any external network.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        embed::EmbedPayload,
        form::{AnswerValue, FormAnswer, FormSubmission},
    },
    router,
    service::dispatch::{DispatchReceipt, SubmissionDispatcher},
    state::AppState,
};

/// Channel id the stub dispatcher reports in its receipts.
pub const STUB_CHANNEL_ID: &str = "999000999000999";
/// Message id the stub dispatcher reports in its receipts.
pub const STUB_MESSAGE_ID: &str = "111222333444555";

/// Outcome the stub dispatcher should produce.
pub enum StubOutcome {
    Succeed,
    ChannelNotConfigured,
    ChannelNotFound,
    Fail(String),
}

/// Recording dispatcher used in place of the Discord client.
///
/// Every payload that reaches `dispatch` is recorded, so tests can assert both
/// what was sent and that nothing was sent on rejected requests.
pub struct StubDispatcher {
    outcome: StubOutcome,
    dispatched: Mutex<Vec<EmbedPayload>>,
}

impl StubDispatcher {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            dispatched: Mutex::new(Vec::new()),
        })
    }

    /// Payloads that reached the dispatcher, in order.
    pub fn dispatched(&self) -> Vec<EmbedPayload> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionDispatcher for StubDispatcher {
    async fn dispatch(&self, embed: &EmbedPayload) -> Result<DispatchReceipt, AppError> {
        self.dispatched.lock().unwrap().push(embed.clone());

        match &self.outcome {
            StubOutcome::Succeed => Ok(DispatchReceipt {
                message_id: STUB_MESSAGE_ID.to_string(),
                channel_id: STUB_CHANNEL_ID.to_string(),
            }),
            StubOutcome::ChannelNotConfigured => Err(AppError::ChannelNotConfigured),
            StubOutcome::ChannelNotFound => Err(AppError::NotFound(
                "Channel not found - check FORM_SUBMISSION_CHANNEL_ID".to_string(),
            )),
            StubOutcome::Fail(message) => Err(AppError::InternalError(message.clone())),
        }
    }
}

/// Builds application state around a stub dispatcher.
pub fn test_state(api_secret: &str, dispatcher: Arc<StubDispatcher>) -> AppState {
    AppState::new(api_secret.to_string(), dispatcher)
}

/// A representative two-question submission with a respondent email.
pub fn sample_submission() -> FormSubmission {
    FormSubmission {
        form_title: "Member Application".to_string(),
        responses: vec![
            FormAnswer {
                question: "Why do you want to join?".to_string(),
                answer: AnswerValue::Text("I like the community".to_string()),
            },
            FormAnswer {
                question: "Which regions are you active in?".to_string(),
                answer: AnswerValue::Choices(vec!["EU".to_string(), "NA".to_string()]),
            },
        ],
        respondent_email: Some("applicant@example.com".to_string()),
        submitted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Serves the full router on an ephemeral localhost port.
///
/// The server task runs until the test process exits; tests address it via the
/// returned socket address.
pub async fn spawn_test_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");

    let app = router::router().with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    addr
}
