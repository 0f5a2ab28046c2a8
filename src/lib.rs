pub mod capture;
pub mod config;
pub mod http;
pub mod playback;
pub mod speech;

pub use capture::{
    describe_error, CaptureController, CaptureSnapshot, CaptureState, SessionStatus,
    TranscriptState, UNSUPPORTED_MESSAGE,
};
pub use config::{Config, SpeechConfig};
pub use http::{create_router, AppState, PageContext};
pub use playback::{escape_double_quotes, synthesis_script, PlaybackOutcome, PlaybackTrigger};
pub use speech::{
    BridgeFeed, BridgedRecognizer, Capability, PayloadQueue, RecognitionBackend, RecognitionEvent,
    RecognitionResult, ScriptedRecognizer, SynthesisBackend, Utterance,
};
