//! Integration tests for the assistant stream contract
//!
//! No provider is configured in this environment, so `stream_start` settles
//! the stream with a failure event. These tests check that the failure is
//! delivered exactly once and that the session reducer surfaces it.

use portfolio::assistant::{is_configured, stream_poll, stream_start};
use portfolio::session::{ChatSession, ChatStatus, StreamEvent};
use std::sync::Mutex;

// Serializes the tests that touch provider env vars.
static ENV_GUARD: Mutex<()> = Mutex::new(());

fn clear_provider_env() {
    // SAFETY: callers hold ENV_GUARD, and nothing else in this binary reads
    // these variables concurrently.
    unsafe {
        std::env::remove_var("GROQ_API_KEY");
        std::env::remove_var("OPENAI_API_KEY");
    }
}

#[tokio::test]
async fn test_unconfigured_stream_settles_with_failure() {
    let _guard = ENV_GUARD.lock().expect("env guard");
    clear_provider_env();
    assert!(!is_configured());

    let id = stream_start("hello".to_string(), Vec::new())
        .await
        .expect("stream start");
    let events = stream_poll(id).await.expect("first poll");
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], StreamEvent::Failed(msg) if msg.contains("provider")));

    // Settled streams are dropped from the store; later polls are an error.
    assert!(stream_poll(id).await.is_err());
}

#[tokio::test]
async fn test_failure_reaches_the_session_as_an_error() {
    let _guard = ENV_GUARD.lock().expect("env guard");
    clear_provider_env();

    let mut session = ChatSession::new();
    let exchange = session
        .submit("What stack does Aditya use?")
        .expect("exchange");
    assert_eq!(session.status(), ChatStatus::Submitted);

    let id = stream_start(exchange.prompt, exchange.history)
        .await
        .expect("stream start");
    for event in stream_poll(id).await.expect("poll") {
        session.apply(event);
    }

    assert_eq!(session.status(), ChatStatus::Error);
    assert!(session.error().is_some());
    // The user's message stays in the transcript for a manual retry.
    assert_eq!(session.transcript().len(), 1);

    // A fresh submit clears the error.
    assert!(session.submit("retry").is_some());
    assert_eq!(session.status(), ChatStatus::Submitted);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_unknown_stream_id_is_an_error() {
    let err = stream_poll(u64::MAX).await.expect_err("must fail");
    assert!(err.to_string().contains("invalid stream id"));
}
