// Wire-format tests for the event bridge messages
//
// The page posts facility events as tagged JSON; the `final` field name on
// results is part of the wire contract.

use speechpad::speech::{RecognitionEvent, RecognitionResult};
use speechpad::{CaptureState, SessionStatus};

#[test]
fn test_results_event_deserialization() {
    let json = r#"{
        "type": "results",
        "items": [
            {"text": "hello", "final": false},
            {"text": "hello world", "final": true}
        ]
    }"#;

    let event: RecognitionEvent = serde_json::from_str(json).unwrap();

    match event {
        RecognitionEvent::Results { items } => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].text, "hello");
            assert!(!items[0].is_final);
            assert!(items[1].is_final);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_result_serialization_uses_final_field() {
    let json = serde_json::to_string(&RecognitionResult::finalized("done")).unwrap();

    assert!(json.contains("\"final\":true"));
    assert!(json.contains("\"text\":\"done\""));
}

#[test]
fn test_lifecycle_event_tags() {
    let started: RecognitionEvent = serde_json::from_str(r#"{"type": "started"}"#).unwrap();
    assert_eq!(started, RecognitionEvent::Started);

    let ended: RecognitionEvent = serde_json::from_str(r#"{"type": "ended"}"#).unwrap();
    assert_eq!(ended, RecognitionEvent::Ended);

    let error: RecognitionEvent =
        serde_json::from_str(r#"{"type": "error", "code": "no-speech"}"#).unwrap();
    assert_eq!(
        error,
        RecognitionEvent::Error {
            code: "no-speech".to_string()
        }
    );
}

#[test]
fn test_event_round_trip() {
    let event = RecognitionEvent::Results {
        items: vec![RecognitionResult::interim("partial words")],
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"results\""));

    let back: RecognitionEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_snapshot_serializes_lowercase_status() {
    let mut state = CaptureState::new(true);
    state.apply(&RecognitionEvent::Started);

    let json = serde_json::to_string(&state.snapshot(1)).unwrap();

    assert!(json.contains("\"status\":\"listening\""));
    assert!(json.contains("\"status_line\":\"Listening... Speak now!\""));
    assert!(json.contains("\"start_enabled\":false"));
    assert!(json.contains("\"stop_enabled\":true"));

    assert_eq!(state.snapshot(1).status, SessionStatus::Listening);
}
