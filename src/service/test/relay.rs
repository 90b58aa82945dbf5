use crate::{
    controller::health::SERVICE_NAME,
    error::AppError,
    service::relay::SubmissionRelay,
    testkit::{
        sample_submission, spawn_test_server, test_state, StubDispatcher, StubOutcome,
        STUB_CHANNEL_ID, STUB_MESSAGE_ID,
    },
};

/// Tests the full client path: format, POST with bearer token, parse response.
///
/// Runs the real router on a loopback port with a recording dispatcher in
/// place of Discord.
///
/// Expected: Ok with stub message/channel ids; exactly one payload dispatched,
/// carrying the formatted fields in order
#[tokio::test]
async fn sends_formatted_submission() -> Result<(), AppError> {
    let dispatcher = StubDispatcher::new(StubOutcome::Succeed);
    let addr = spawn_test_server(test_state("secret", dispatcher.clone())).await;

    let relay = SubmissionRelay::new(format!("http://{addr}"), "secret");
    let response = relay.send(&sample_submission()).await?;

    assert!(response.success);
    assert_eq!(response.message_id, STUB_MESSAGE_ID);
    assert_eq!(response.channel_id, STUB_CHANNEL_ID);

    let dispatched = dispatcher.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].title.as_deref(), Some("📋 Member Application"));
    assert_eq!(dispatched[0].fields.len(), 3);
    assert_eq!(dispatched[0].fields[1].value, "EU, NA");
    assert_eq!(dispatched[0].fields[2].name, "Submitted by");

    Ok(())
}

/// Tests that a wrong secret is rejected before anything reaches the
/// dispatcher.
///
/// Expected: Err mentioning the 401, zero payloads dispatched
#[tokio::test]
async fn rejects_wrong_secret_without_dispatching() {
    let dispatcher = StubDispatcher::new(StubOutcome::Succeed);
    let addr = spawn_test_server(test_state("secret", dispatcher.clone())).await;

    let relay = SubmissionRelay::new(format!("http://{addr}"), "not-the-secret");
    let result = relay.send(&sample_submission()).await;

    match result {
        Err(AppError::InternalError(message)) => {
            assert!(message.contains("401"), "unexpected error: {message}");
        }
        other => panic!("expected InternalError, got {other:?}"),
    }
    assert!(dispatcher.dispatched().is_empty());
}

/// Tests that dispatcher failures are surfaced with the server-reported error.
///
/// Expected: Err mentioning the 500
#[tokio::test]
async fn surfaces_endpoint_failure() {
    let dispatcher = StubDispatcher::new(StubOutcome::Fail("gateway exploded".to_string()));
    let addr = spawn_test_server(test_state("secret", dispatcher)).await;

    let relay = SubmissionRelay::new(format!("http://{addr}"), "secret");
    let result = relay.send(&sample_submission()).await;

    match result {
        Err(AppError::InternalError(message)) => {
            assert!(message.contains("500"), "unexpected error: {message}");
        }
        other => panic!("expected InternalError, got {other:?}"),
    }
}

/// Tests the health probe against the live router.
///
/// Expected: Ok with status "ok" and the service name
#[tokio::test]
async fn checks_health() -> Result<(), AppError> {
    let dispatcher = StubDispatcher::new(StubOutcome::Succeed);
    let addr = spawn_test_server(test_state("secret", dispatcher)).await;

    let relay = SubmissionRelay::new(format!("http://{addr}"), "secret");
    let health = relay.check_health().await?;

    assert_eq!(health.status, "ok");
    assert_eq!(health.service, SERVICE_NAME);

    Ok(())
}
