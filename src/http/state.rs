use std::sync::Arc;

use crate::capture::CaptureController;
use crate::config::SpeechConfig;
use crate::http::page::PageContext;
use crate::playback::PlaybackTrigger;
use crate::speech::{BridgeFeed, BridgedRecognizer, PayloadQueue};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Capture controller (single recognition session)
    pub capture: Arc<CaptureController>,

    /// Feed the event bridge pushes browser callbacks through
    pub bridge: BridgeFeed,

    /// Playback trigger
    pub playback: Arc<PlaybackTrigger>,

    /// Rendered script payloads waiting for the page
    pub payloads: Arc<PayloadQueue>,

    /// Values baked into the host page
    pub page: PageContext,
}

impl AppState {
    pub fn new(service_name: impl Into<String>, speech: SpeechConfig) -> Self {
        let bridge = BridgeFeed::new();
        let recognizer = BridgedRecognizer::new(bridge.clone());
        let capture = Arc::new(CaptureController::new(Some(Box::new(recognizer))));

        let payloads = Arc::new(PayloadQueue::new());
        let playback = Arc::new(PlaybackTrigger::new(
            Some(payloads.clone() as Arc<dyn crate::speech::SynthesisBackend>),
            speech.locale.clone(),
        ));

        Self {
            capture,
            bridge,
            playback,
            payloads,
            page: PageContext {
                service_name: service_name.into(),
                speech,
            },
        }
    }
}
