//! Browser speech facility boundary
//!
//! The recognition and synthesis engines are external, browser-provided
//! services. This module defines the traits the rest of the crate programs
//! against, plus the implementations used in practice:
//! - `BridgedRecognizer`: fed by the real browser page over the HTTP bridge
//! - `ScriptedRecognizer`: replays a fixed event sequence (tests, demos)
//! - `PayloadQueue`: renders utterances into script payloads for the page

pub mod capability;
pub mod events;
pub mod recognizer;
pub mod synthesis;

pub use capability::Capability;
pub use events::{RecognitionEvent, RecognitionResult};
pub use recognizer::{BridgeFeed, BridgedRecognizer, RecognitionBackend, ScriptedRecognizer};
pub use synthesis::{PayloadQueue, SynthesisBackend, Utterance};
