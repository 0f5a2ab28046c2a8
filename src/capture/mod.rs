//! Speech capture controller
//!
//! This module provides the `CaptureController` abstraction that manages:
//! - The single recognition session lifecycle (start/stop)
//! - Ordered application of facility events (started/results/error/ended)
//! - Transcript accumulation (finalized + pending hypothesis)
//! - User-visible status, error text, and control enablement

mod session;
mod transcript;

pub use session::{
    describe_error, CaptureController, CaptureSnapshot, CaptureState, SessionStatus,
    UNSUPPORTED_MESSAGE,
};
pub use transcript::TranscriptState;
