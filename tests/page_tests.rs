// Rendering tests for the host page

use speechpad::{PageContext, SpeechConfig};

fn context() -> PageContext {
    PageContext {
        service_name: "speechpad".to_string(),
        speech: SpeechConfig::default(),
    }
}

#[test]
fn test_page_contains_both_widgets() {
    let page = speechpad::http::page::render(&context());

    // Capture widget
    assert!(page.contains("id=\"transcript\""));
    assert!(page.contains("id=\"startBtn\""));
    assert!(page.contains("id=\"stopBtn\""));
    assert!(page.contains("id=\"status\""));
    assert!(page.contains("id=\"error\""));

    // Playback widget
    assert!(page.contains("id=\"ttsText\""));
    assert!(page.contains("id=\"speakBtn\""));
}

#[test]
fn test_page_embeds_speech_settings() {
    let mut ctx = context();
    ctx.speech.locale = "fr-FR".to_string();
    ctx.speech.continuous = false;

    let page = speechpad::http::page::render(&ctx);

    assert!(page.contains("locale: 'fr-FR'"));
    assert!(page.contains("continuous: false"));
    assert!(page.contains("interimResults: true"));
    assert!(!page.contains("{{"), "all placeholders must be substituted");
}

#[test]
fn test_page_wires_bridge_endpoints() {
    let page = speechpad::http::page::render(&context());

    assert!(page.contains("'/capture/capability'"));
    assert!(page.contains("'/capture/start'"));
    assert!(page.contains("'/capture/events'"));
    assert!(page.contains("'/capture/state'"));
    assert!(page.contains("'/speak'"));
    assert!(page.contains("'/playback/queue'"));
}

#[test]
fn test_page_carries_user_facing_strings() {
    let page = speechpad::http::page::render(&context());

    assert!(page.contains("Click \"Start\" and speak clearly into your microphone..."));
    assert!(page.contains("Ready to listen"));
    assert!(page.contains(
        "Speech recognition not supported in this browser. Please use Chrome, Edge, or Safari."
    ));
}
