use anyhow::{bail, Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use super::events::RecognitionEvent;

/// Speech recognition facility trait
///
/// Implementations:
/// - Browser: the page bridges the real recognition engine's callbacks over
///   HTTP (`BridgedRecognizer`)
/// - Scripted: replays a fixed event sequence for tests and demos
#[async_trait::async_trait]
pub trait RecognitionBackend: Send + Sync {
    /// Begin a recognition session
    ///
    /// Returns a channel receiver that delivers session events in
    /// recognition order.
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>>;

    /// Request the active session to end
    ///
    /// The session is only over once `Ended` comes through the channel.
    async fn stop(&mut self) -> Result<()>;

    /// Check if a session is currently active
    fn is_listening(&self) -> bool;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Handle the HTTP bridge uses to push browser-reported events into the
/// active session's channel.
///
/// Cloneable so the bridge endpoint and the recognizer share one slot. Events
/// pushed while no session is active are rejected.
#[derive(Clone, Default)]
pub struct BridgeFeed {
    sender: Arc<Mutex<Option<mpsc::Sender<RecognitionEvent>>>>,
}

impl BridgeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one facility event to the active session, preserving order.
    pub async fn push(&self, event: RecognitionEvent) -> Result<()> {
        let sender = { self.sender.lock().await.clone() };

        let Some(sender) = sender else {
            bail!("no active capture session");
        };

        sender
            .send(event)
            .await
            .context("capture session already ended")?;

        Ok(())
    }

    async fn install(&self, sender: mpsc::Sender<RecognitionEvent>) {
        let mut slot = self.sender.lock().await;
        *slot = Some(sender);
    }

    async fn clear(&self) {
        let mut slot = self.sender.lock().await;
        *slot = None;
    }
}

/// Recognition backend fed by the browser page.
///
/// `start()` wires a fresh event channel into the shared `BridgeFeed`; the
/// page posts the facility's start/result/error/end callbacks through it.
pub struct BridgedRecognizer {
    feed: BridgeFeed,
    listening: AtomicBool,
}

impl BridgedRecognizer {
    pub fn new(feed: BridgeFeed) -> Self {
        Self {
            feed,
            listening: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl RecognitionBackend for BridgedRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        let (tx, rx) = mpsc::channel(64);
        self.feed.install(tx).await;
        self.listening.store(true, Ordering::SeqCst);

        info!("Browser recognition bridge armed");

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        // The browser normally delivers its own end event; injecting one here
        // covers API-driven stops. A session that already ended just drops it.
        if let Err(e) = self.feed.push(RecognitionEvent::Ended).await {
            debug!("Recognition session already over: {:#}", e);
        }

        self.feed.clear().await;
        self.listening.store(false, Ordering::SeqCst);

        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "browser-bridge"
    }
}

/// Recognition backend that replays a fixed event sequence.
///
/// `start()` delivers `Started` followed by the script; `stop()` injects
/// `Ended`, the same shape a real facility produces.
pub struct ScriptedRecognizer {
    script: Vec<RecognitionEvent>,
    sender: Option<mpsc::Sender<RecognitionEvent>>,
}

impl ScriptedRecognizer {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            sender: None,
        }
    }
}

#[async_trait::async_trait]
impl RecognitionBackend for ScriptedRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        // Buffer the whole script up front so replay never blocks on the
        // consumer.
        let (tx, rx) = mpsc::channel(self.script.len() + 2);

        tx.send(RecognitionEvent::Started)
            .await
            .context("scripted session closed before starting")?;

        for event in self.script.drain(..) {
            tx.send(event)
                .await
                .context("scripted session closed mid-script")?;
        }

        self.sender = Some(tx);

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(sender) = self.sender.take() {
            if sender.send(RecognitionEvent::Ended).await.is_err() {
                warn!("Scripted session already ended");
            }
        }

        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.sender.is_some()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
