// Lifecycle tests for the capture controller, driven without a browser
//
// The scripted recognizer replays a fixed event sequence; the bridge feed
// gives tests step-by-step control over event delivery. `stop()` waits for
// the drain task, so state assertions after it are deterministic.

use std::time::Duration;

use speechpad::speech::{
    BridgeFeed, BridgedRecognizer, RecognitionEvent, RecognitionResult, ScriptedRecognizer,
};
use speechpad::{CaptureController, SessionStatus, UNSUPPORTED_MESSAGE};

fn scripted(script: Vec<RecognitionEvent>) -> CaptureController {
    CaptureController::new(Some(Box::new(ScriptedRecognizer::new(script))))
}

fn bridged() -> (CaptureController, BridgeFeed) {
    let feed = BridgeFeed::new();
    let controller = CaptureController::new(Some(Box::new(BridgedRecognizer::new(feed.clone()))));
    (controller, feed)
}

async fn wait_until_idle(controller: &CaptureController) {
    for _ in 0..200 {
        if !controller.is_active() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("controller did not return to idle");
}

#[tokio::test]
async fn test_scripted_session_accumulates_transcript() {
    let controller = scripted(vec![
        RecognitionEvent::Results {
            items: vec![RecognitionResult::interim("hello")],
        },
        RecognitionEvent::Results {
            items: vec![RecognitionResult::finalized("hello world")],
        },
    ]);

    controller.start().await.unwrap();
    controller.stop().await.unwrap();

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.status, SessionStatus::Idle);
    assert_eq!(snapshot.transcript, "hello world ");
    assert_eq!(snapshot.finalized, "hello world ");
    assert_eq!(snapshot.pending, "");
    assert!(snapshot.start_enabled);
    assert!(!snapshot.stop_enabled);
}

#[tokio::test]
async fn test_start_while_listening_is_a_noop() {
    let (controller, feed) = bridged();

    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();

    // Second start must not create a second session
    controller.start().await.unwrap();

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.sessions_started, 1);

    controller.stop().await.unwrap();
}

#[tokio::test]
async fn test_error_is_reported_and_session_recovers() {
    let controller = scripted(vec![RecognitionEvent::Error {
        code: "not-allowed".to_string(),
    }]);

    controller.start().await.unwrap();
    controller.stop().await.unwrap();

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.status, SessionStatus::Idle);
    assert!(snapshot
        .error
        .as_deref()
        .unwrap()
        .contains("Microphone access denied."));
    assert!(snapshot.start_enabled, "errors are non-fatal to future sessions");
}

#[tokio::test]
async fn test_unsupported_controller_refuses_start() {
    let controller = CaptureController::new(None);

    let snapshot = controller.snapshot().await;
    assert!(!snapshot.supported);
    assert!(!snapshot.start_enabled);
    assert!(!snapshot.stop_enabled);
    assert_eq!(snapshot.error.as_deref(), Some(UNSUPPORTED_MESSAGE));

    assert!(controller.start().await.is_err());
}

#[tokio::test]
async fn test_transcript_persists_across_sessions() {
    let (controller, feed) = bridged();

    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();
    feed.push(RecognitionEvent::Results {
        items: vec![RecognitionResult::finalized("one")],
    })
    .await
    .unwrap();
    controller.stop().await.unwrap();

    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();
    feed.push(RecognitionEvent::Results {
        items: vec![RecognitionResult::finalized("two")],
    })
    .await
    .unwrap();
    controller.stop().await.unwrap();

    let transcript = controller.transcript().await;
    assert_eq!(transcript.finalized, "one two ");

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.sessions_started, 2);
}

#[tokio::test]
async fn test_facility_driven_end_returns_to_idle() {
    let (controller, feed) = bridged();

    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();
    feed.push(RecognitionEvent::Ended).await.unwrap();

    wait_until_idle(&controller).await;

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.status, SessionStatus::Idle);
    assert!(snapshot.start_enabled);

    // A new session still starts cleanly after a facility-driven end
    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();
    controller.stop().await.unwrap();

    assert_eq!(controller.snapshot().await.sessions_started, 2);
}

#[tokio::test]
async fn test_new_session_clears_displayed_error() {
    let (controller, feed) = bridged();

    controller.start().await.unwrap();
    feed.push(RecognitionEvent::Started).await.unwrap();
    feed.push(RecognitionEvent::Error {
        code: "no-speech".to_string(),
    })
    .await
    .unwrap();
    controller.stop().await.unwrap();

    assert!(controller.snapshot().await.error.is_some());

    controller.start().await.unwrap();
    assert_eq!(controller.snapshot().await.error, None);

    controller.stop().await.unwrap();
}

#[tokio::test]
async fn test_events_rejected_without_active_session() {
    let (controller, feed) = bridged();

    assert!(feed.push(RecognitionEvent::Started).await.is_err());

    controller.start().await.unwrap();
    assert!(feed.push(RecognitionEvent::Started).await.is_ok());
    controller.stop().await.unwrap();

    assert!(feed
        .push(RecognitionEvent::Results {
            items: vec![RecognitionResult::interim("late")],
        })
        .await
        .is_err());
}

#[tokio::test]
async fn test_stop_without_session_is_a_noop() {
    let (controller, _feed) = bridged();

    controller.stop().await.unwrap();

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.status, SessionStatus::Idle);
    assert_eq!(snapshot.sessions_started, 0);
}
