//! HTTP host for the page and the browser bridge
//!
//! This module serves the host page and a small API the page uses:
//! - GET  / - host page with both widgets embedded
//! - POST /capture/capability - page reports its speech feature probe
//! - POST /capture/start, /capture/stop - capture affordances
//! - POST /capture/events - ordered facility events (started/results/error/ended)
//! - GET  /capture/state - controller snapshot for display
//! - GET  /capture/transcript - accumulated transcript
//! - POST /speak - submit text for playback
//! - GET  /playback/queue - drain rendered playback payloads
//! - GET  /health - health check

mod handlers;
pub mod page;
mod routes;
mod state;

pub use page::PageContext;
pub use routes::create_router;
pub use state::AppState;
