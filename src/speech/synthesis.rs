use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::info;

use crate::playback::script::synthesis_script;

/// One unit of text submitted to the synthesis facility for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Literal text to speak
    pub text: String,

    /// BCP 47 locale tag, e.g. "en-US"
    pub lang: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
        }
    }
}

/// Speech synthesis facility trait
///
/// Fire-and-forget: no completion is observed and queued utterances are
/// played out by the facility's own default queuing behavior.
#[async_trait::async_trait]
pub trait SynthesisBackend: Send + Sync {
    /// Queue one utterance for playback
    async fn enqueue(&self, utterance: &Utterance);

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Synthesis backend targeting the browser.
///
/// Each utterance is rendered into a self-contained script payload and
/// queued; the page drains the queue and hands the payloads to the browser's
/// synthesis engine.
#[derive(Default)]
pub struct PayloadQueue {
    payloads: Mutex<VecDeque<String>>,
}

impl PayloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued payloads, oldest first.
    pub async fn drain(&self) -> Vec<String> {
        let mut payloads = self.payloads.lock().await;
        payloads.drain(..).collect()
    }

    /// Number of payloads waiting to be drained.
    pub async fn len(&self) -> usize {
        self.payloads.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payloads.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SynthesisBackend for PayloadQueue {
    async fn enqueue(&self, utterance: &Utterance) {
        let payload = synthesis_script(utterance);

        let mut payloads = self.payloads.lock().await;
        payloads.push_back(payload);

        info!(
            "Queued utterance for playback ({} chars, lang {})",
            utterance.text.len(),
            utterance.lang
        );
    }

    fn name(&self) -> &str {
        "payload-queue"
    }
}
