use serde::{Deserialize, Serialize};

use crate::speech::RecognitionResult;

/// Transcript accumulated by the capture controller.
///
/// `finalized` is append-only: every finalized chunk is added with one
/// trailing space and never rewritten. `pending` holds only the latest
/// interim hypothesis; it is replaced by each newer interim result and
/// discarded (not appended) once its utterance finalizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptState {
    pub finalized: String,
    pub pending: String,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one result batch, walking items in arrival order.
    pub fn apply_batch(&mut self, items: &[RecognitionResult]) {
        for item in items {
            if item.is_final {
                self.finalized.push_str(&item.text);
                self.finalized.push(' ');
                self.pending.clear();
            } else {
                self.pending.clear();
                self.pending.push_str(&item.text);
            }
        }
    }

    /// Text shown to the user: finalized chunks followed by the pending
    /// hypothesis.
    pub fn display(&self) -> String {
        format!("{}{}", self.finalized, self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty() && self.pending.is_empty()
    }
}
