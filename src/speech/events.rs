use serde::{Deserialize, Serialize};

/// One recognition hypothesis from the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Recognized text for this hypothesis
    pub text: String,

    /// Whether the facility will revise this hypothesis further
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl RecognitionResult {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Session events delivered by a recognition facility.
///
/// Events for a session arrive through a single channel and must be applied
/// in delivery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// The facility has begun listening
    Started,

    /// Incremental batch of recognition results, in arrival order
    Results { items: Vec<RecognitionResult> },

    /// The facility reported an error; the session keeps running until the
    /// facility ends it
    Error { code: String },

    /// The session is over, whether by explicit stop, error, or timeout
    Ended,
}
