//! Speech playback trigger
//!
//! Takes a block of text and hands it to the synthesis facility for one-shot
//! playback. No lifecycle beyond fire-and-forget: no completion callback, no
//! cancellation, and the facility's own queuing behavior is not overridden.

pub mod script;
mod trigger;

pub use script::{escape_double_quotes, synthesis_script};
pub use trigger::{PlaybackOutcome, PlaybackTrigger};
