use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Host page and health check
        .route("/", get(handlers::get_page))
        .route("/health", get(handlers::health_check))
        // Capture control and event bridge
        .route("/capture/capability", post(handlers::report_capability))
        .route("/capture/start", post(handlers::start_capture))
        .route("/capture/stop", post(handlers::stop_capture))
        .route("/capture/events", post(handlers::push_capture_events))
        // Capture queries
        .route("/capture/state", get(handlers::get_capture_state))
        .route("/capture/transcript", get(handlers::get_capture_transcript))
        // Playback
        .route("/speak", post(handlers::speak))
        .route("/playback/queue", get(handlers::drain_playback_queue))
        // The widgets are meant to be embeddable from a surrounding host page
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
