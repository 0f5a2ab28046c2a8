use super::page;
use super::state::AppState;
use crate::speech::{Capability, RecognitionEvent};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Facility events posted by the page, in recognition order
#[derive(Debug, Deserialize)]
pub struct EventBatchRequest {
    pub events: Vec<RecognitionEvent>,
}

#[derive(Debug, Serialize)]
pub struct EventBatchResponse {
    pub accepted: usize,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub finalized: String,
    pub pending: String,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct PayloadQueueResponse {
    pub payloads: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Host page with the capture and playback widgets embedded
pub async fn get_page(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.page))
}

/// POST /capture/capability
/// Page reports which speech features its browser offers
pub async fn report_capability(
    State(state): State<AppState>,
    Json(capability): Json<Capability>,
) -> impl IntoResponse {
    info!(
        "Browser capability report: recognition={}, synthesis={}",
        capability.recognition, capability.synthesis
    );

    if !capability.recognition {
        state.capture.disable().await;
    }

    if !capability.synthesis {
        state.playback.disable().await;
    }

    StatusCode::NO_CONTENT
}

/// POST /capture/start
/// Arm a recognition session; a no-op if one is already active
pub async fn start_capture(State(state): State<AppState>) -> impl IntoResponse {
    match state.capture.start().await {
        Ok(()) => (StatusCode::OK, Json(state.capture.snapshot().await)).into_response(),
        Err(e) => {
            warn!("Refusing capture start: {:#}", e);
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("{:#}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /capture/stop
/// Request the active session to end
pub async fn stop_capture(State(state): State<AppState>) -> impl IntoResponse {
    match state.capture.stop().await {
        Ok(()) => (StatusCode::OK, Json(state.capture.snapshot().await)).into_response(),
        Err(e) => {
            warn!("Failed to stop capture: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("{:#}", e),
                }),
            )
                .into_response()
        }
    }
}

/// POST /capture/events
/// Ordered delivery of facility events into the active session
pub async fn push_capture_events(
    State(state): State<AppState>,
    Json(batch): Json<EventBatchRequest>,
) -> impl IntoResponse {
    let total = batch.events.len();

    for event in batch.events {
        if let Err(e) = state.bridge.push(event).await {
            warn!("Dropping capture event: {:#}", e);
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("{:#}", e),
                }),
            )
                .into_response();
        }
    }

    (StatusCode::OK, Json(EventBatchResponse { accepted: total })).into_response()
}

/// GET /capture/state
/// Current controller snapshot for display
pub async fn get_capture_state(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.capture.snapshot().await)
}

/// GET /capture/transcript
/// Accumulated transcript, broken out by finalized/pending
pub async fn get_capture_transcript(State(state): State<AppState>) -> impl IntoResponse {
    let transcript = state.capture.transcript().await;

    Json(TranscriptResponse {
        display: transcript.display(),
        finalized: transcript.finalized,
        pending: transcript.pending,
    })
}

/// POST /speak
/// Submit text for one-shot playback
pub async fn speak(
    State(state): State<AppState>,
    Json(req): Json<SpeakRequest>,
) -> impl IntoResponse {
    let outcome = state.playback.speak(&req.text).await;

    let code = match outcome {
        crate::playback::PlaybackOutcome::Queued => StatusCode::OK,
        crate::playback::PlaybackOutcome::EmptyInput => StatusCode::BAD_REQUEST,
        crate::playback::PlaybackOutcome::Unsupported => StatusCode::CONFLICT,
    };

    (
        code,
        Json(SpeakResponse {
            status: outcome.status(),
            message: outcome.message(),
        }),
    )
}

/// GET /playback/queue
/// Drain script payloads queued for the page
pub async fn drain_playback_queue(State(state): State<AppState>) -> impl IntoResponse {
    Json(PayloadQueueResponse {
        payloads: state.payloads.drain().await,
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
