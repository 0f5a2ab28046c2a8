use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::transcript::TranscriptState;
use crate::speech::{RecognitionBackend, RecognitionEvent};

/// Shown when the browser offers no recognition facility at all.
pub const UNSUPPORTED_MESSAGE: &str =
    "Speech recognition not supported in this browser. Please use Chrome, Edge, or Safari.";

/// Lifecycle state of the single recognition session.
///
/// Errors are a side-channel display field, not a status of their own: the
/// facility keeps running (or ends on its own) after reporting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Listening,
}

impl SessionStatus {
    /// The status line shown under the transcript.
    pub fn status_line(self) -> &'static str {
        match self {
            SessionStatus::Idle => "Ready to listen",
            SessionStatus::Listening => "Listening... Speak now!",
        }
    }
}

/// Map a facility error code to the text shown to the user.
pub fn describe_error(code: &str) -> String {
    let detail = match code {
        "no-speech" => "No speech detected. Please try again.",
        "audio-capture" => "No microphone found.",
        "not-allowed" => "Microphone access denied.",
        other => other,
    };

    format!("Error: {}", detail)
}

/// UI-facing state owned by the capture controller.
///
/// Mutated only by the controller's own operations and event application, in
/// delivery order. The transcript deliberately survives session boundaries:
/// a new session appends to what earlier ones produced.
#[derive(Debug)]
pub struct CaptureState {
    pub status: SessionStatus,
    pub transcript: TranscriptState,
    pub error: Option<String>,
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub supported: bool,
}

impl CaptureState {
    pub fn new(supported: bool) -> Self {
        Self {
            status: SessionStatus::Idle,
            transcript: TranscriptState::new(),
            error: if supported {
                None
            } else {
                Some(UNSUPPORTED_MESSAGE.to_string())
            },
            session_id: None,
            started_at: None,
            supported,
        }
    }

    /// Apply one facility event.
    pub fn apply(&mut self, event: &RecognitionEvent) {
        match event {
            RecognitionEvent::Started => {
                self.status = SessionStatus::Listening;
                self.error = None;
            }
            RecognitionEvent::Results { items } => {
                self.transcript.apply_batch(items);
            }
            RecognitionEvent::Error { code } => {
                // The facility ends the session itself; only `Ended` moves
                // the status back to Idle.
                self.error = Some(describe_error(code));
            }
            RecognitionEvent::Ended => {
                self.status = SessionStatus::Idle;
            }
        }
    }

    pub fn snapshot(&self, sessions_started: usize) -> CaptureSnapshot {
        CaptureSnapshot {
            supported: self.supported,
            status: self.status,
            status_line: self.status.status_line().to_string(),
            transcript: self.transcript.display(),
            finalized: self.transcript.finalized.clone(),
            pending: self.transcript.pending.clone(),
            error: self.error.clone(),
            session_id: self.session_id.clone(),
            started_at: self.started_at,
            sessions_started,
            start_enabled: self.supported && self.status == SessionStatus::Idle,
            stop_enabled: self.supported && self.status == SessionStatus::Listening,
        }
    }
}

/// Serializable view of the capture controller for the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSnapshot {
    /// Whether the recognition facility exists at all
    pub supported: bool,

    /// Current lifecycle status
    pub status: SessionStatus,

    /// Status line shown under the transcript
    pub status_line: String,

    /// Display transcript (finalized + pending)
    pub transcript: String,

    /// Finalized portion of the transcript
    pub finalized: String,

    /// Latest interim hypothesis
    pub pending: String,

    /// User-visible error text, if any
    pub error: Option<String>,

    /// Identifier of the current (or most recent) session
    pub session_id: Option<String>,

    /// When the current (or most recent) session started
    pub started_at: Option<DateTime<Utc>>,

    /// How many sessions have been started since launch
    pub sessions_started: usize,

    /// Start affordance enablement
    pub start_enabled: bool,

    /// Stop affordance enablement
    pub stop_enabled: bool,
}

/// Controller for the single recognition session.
///
/// Owns the transcript and status state and reflects facility events into
/// them via a spawned drain task, one session at a time. Built with `None`
/// when the recognition capability is absent: the controls stay disabled and
/// no event channel is ever created.
pub struct CaptureController {
    /// Recognition facility, `None` when the capability is absent
    recognizer: Mutex<Option<Box<dyn RecognitionBackend>>>,

    /// Shared UI-facing state
    state: Arc<Mutex<CaptureState>>,

    /// Whether a session is currently active
    active: Arc<AtomicBool>,

    /// Sessions started since launch
    sessions_started: Arc<AtomicUsize>,

    /// Handle for the event drain task
    task: Mutex<Option<JoinHandle<()>>>,
}

impl CaptureController {
    pub fn new(recognizer: Option<Box<dyn RecognitionBackend>>) -> Self {
        let supported = recognizer.is_some();

        if !supported {
            warn!("Recognition facility absent; capture controls disabled");
        }

        Self {
            recognizer: Mutex::new(recognizer),
            state: Arc::new(Mutex::new(CaptureState::new(supported))),
            active: Arc::new(AtomicBool::new(false)),
            sessions_started: Arc::new(AtomicUsize::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Start a recognition session.
    ///
    /// A no-op while a session is already active. The status flips to
    /// Listening once the facility's own `Started` event arrives.
    pub async fn start(&self) -> Result<()> {
        let mut recognizer = self.recognizer.lock().await;

        if self.active.load(Ordering::SeqCst) {
            warn!("Capture session already active");
            return Ok(());
        }

        let Some(backend) = recognizer.as_mut() else {
            bail!("speech recognition is not available");
        };

        let session_id = format!("capture-{}", uuid::Uuid::new_v4());
        info!("Starting capture session {} ({})", session_id, backend.name());

        let mut events = backend
            .start()
            .await
            .context("Failed to start recognition backend")?;

        self.active.store(true, Ordering::SeqCst);
        self.sessions_started.fetch_add(1, Ordering::SeqCst);

        {
            let mut state = self.state.lock().await;
            state.session_id = Some(session_id);
            state.started_at = Some(Utc::now());
            state.error = None;
        }

        let state = Arc::clone(&self.state);
        let active = Arc::clone(&self.active);

        let task = tokio::spawn(async move {
            info!("Capture event task started");

            while let Some(event) = events.recv().await {
                let ended = matches!(event, RecognitionEvent::Ended);

                {
                    let mut state = state.lock().await;
                    state.apply(&event);
                }

                if ended {
                    break;
                }
            }

            // A channel that closes without an end event still returns the
            // session to Idle.
            {
                let mut state = state.lock().await;
                state.status = SessionStatus::Idle;
            }

            active.store(false, Ordering::SeqCst);

            info!("Capture event task stopped");
        });

        {
            let mut handle = self.task.lock().await;
            *handle = Some(task);
        }

        Ok(())
    }

    /// Request the active session to end.
    ///
    /// The actual transition back to Idle happens when the facility's end
    /// event drains through the channel.
    pub async fn stop(&self) -> Result<()> {
        if !self.active.load(Ordering::SeqCst) {
            warn!("No capture session active");
            return Ok(());
        }

        info!("Stopping capture session");

        {
            let mut recognizer = self.recognizer.lock().await;
            if let Some(backend) = recognizer.as_mut() {
                backend
                    .stop()
                    .await
                    .context("Failed to stop recognition backend")?;
            }
        }

        // Wait for the drain task to apply the end event
        {
            let mut handle = self.task.lock().await;
            if let Some(task) = handle.take() {
                if let Err(e) = task.await {
                    error!("Capture event task panicked: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Permanently disable capture for this process (capability reported
    /// absent by the page).
    pub async fn disable(&self) {
        {
            let mut recognizer = self.recognizer.lock().await;
            *recognizer = None;
        }

        let mut state = self.state.lock().await;
        state.supported = false;
        state.status = SessionStatus::Idle;
        state.error = Some(UNSUPPORTED_MESSAGE.to_string());

        warn!("Recognition capability reported absent; capture disabled");
    }

    /// Get the current UI-facing snapshot.
    pub async fn snapshot(&self) -> CaptureSnapshot {
        let state = self.state.lock().await;
        state.snapshot(self.sessions_started.load(Ordering::SeqCst))
    }

    /// Get the accumulated transcript.
    pub async fn transcript(&self) -> TranscriptState {
        let state = self.state.lock().await;
        state.transcript.clone()
    }

    /// Whether a session is currently active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
