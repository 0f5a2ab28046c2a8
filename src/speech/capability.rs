use serde::{Deserialize, Serialize};

/// Which speech features the embedding browser offers.
///
/// Probed once per page load; an absent feature permanently disables the
/// corresponding controls for that load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Speech recognition (dictation) is available
    pub recognition: bool,

    /// Speech synthesis (playback) is available
    pub synthesis: bool,
}

impl Capability {
    /// Both features present.
    pub const fn full() -> Self {
        Self {
            recognition: true,
            synthesis: true,
        }
    }

    /// Neither feature present.
    pub const fn none() -> Self {
        Self {
            recognition: false,
            synthesis: false,
        }
    }
}
