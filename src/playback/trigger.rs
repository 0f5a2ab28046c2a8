use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::speech::{SynthesisBackend, Utterance};

/// What became of one `speak` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Utterance handed to the synthesis facility
    Queued,

    /// Text was empty after trimming; nothing submitted
    EmptyInput,

    /// No synthesis facility available; nothing submitted
    Unsupported,
}

impl PlaybackOutcome {
    /// Machine-readable status for bridge responses.
    pub fn status(self) -> &'static str {
        match self {
            PlaybackOutcome::Queued => "queued",
            PlaybackOutcome::EmptyInput => "empty",
            PlaybackOutcome::Unsupported => "unsupported",
        }
    }

    /// User-visible message, if the request did not queue anything.
    pub fn message(self) -> Option<&'static str> {
        match self {
            PlaybackOutcome::Queued => None,
            PlaybackOutcome::EmptyInput => Some("Please enter some text to speak."),
            PlaybackOutcome::Unsupported => {
                Some("Text-to-speech not supported in this browser.")
            }
        }
    }
}

/// One-shot playback trigger.
///
/// Validates the text, builds an utterance with the fixed locale tag, and
/// submits it. Built with `None` when the synthesis capability is absent.
pub struct PlaybackTrigger {
    synthesis: Mutex<Option<Arc<dyn SynthesisBackend>>>,
    locale: String,
}

impl PlaybackTrigger {
    pub fn new(synthesis: Option<Arc<dyn SynthesisBackend>>, locale: impl Into<String>) -> Self {
        Self {
            synthesis: Mutex::new(synthesis),
            locale: locale.into(),
        }
    }

    /// Submit one block of text for playback.
    ///
    /// The utterance carries the caller's literal text; only the emptiness
    /// check looks at the trimmed form.
    pub async fn speak(&self, text: &str) -> PlaybackOutcome {
        if text.trim().is_empty() {
            warn!("Ignoring speak request with no text");
            return PlaybackOutcome::EmptyInput;
        }

        let synthesis = { self.synthesis.lock().await.clone() };

        let Some(synthesis) = synthesis else {
            warn!("Speak request while synthesis facility is unavailable");
            return PlaybackOutcome::Unsupported;
        };

        let utterance = Utterance::new(text, &self.locale);
        synthesis.enqueue(&utterance).await;

        PlaybackOutcome::Queued
    }

    /// Permanently disable playback for this process (capability reported
    /// absent by the page).
    pub async fn disable(&self) {
        let mut synthesis = self.synthesis.lock().await;
        *synthesis = None;

        warn!("Synthesis capability reported absent; playback disabled");
    }

    /// The locale tag stamped on every utterance.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}
