// Scripted Capture Example: drive both widgets without a browser
//
// This example demonstrates the full controller pipeline:
// 1. A scripted recognizer replays a dictation (interim + final results)
// 2. The capture controller applies the events in order and accumulates
//    the transcript
// 3. The playback trigger renders the finished transcript into a synthesis
//    payload, the same payload the host page would hand to the browser
//
// Usage: cargo run --example scripted_capture

use anyhow::Result;
use speechpad::speech::{
    PayloadQueue, RecognitionEvent, RecognitionResult, ScriptedRecognizer, SynthesisBackend,
};
use speechpad::{CaptureController, PlaybackOutcome, PlaybackTrigger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("🎙️  Replaying a scripted dictation");

    // 1. Script the event sequence a real recognition engine would deliver
    let script = vec![
        RecognitionEvent::Results {
            items: vec![RecognitionResult::interim("testing")],
        },
        RecognitionEvent::Results {
            items: vec![RecognitionResult::interim("testing one")],
        },
        RecognitionEvent::Results {
            items: vec![RecognitionResult::finalized("testing one two three")],
        },
        RecognitionEvent::Results {
            items: vec![RecognitionResult::finalized("over and out")],
        },
    ];

    let controller = CaptureController::new(Some(Box::new(ScriptedRecognizer::new(script))));

    // 2. Run one session end to end
    controller.start().await?;
    controller.stop().await?;

    let snapshot = controller.snapshot().await;
    info!("✅ Session over (status: {:?})", snapshot.status);
    info!("📝 Transcript: \"{}\"", snapshot.transcript);

    // 3. Read the transcript back through the playback trigger
    let queue = Arc::new(PayloadQueue::new());
    let trigger = PlaybackTrigger::new(
        Some(queue.clone() as Arc<dyn SynthesisBackend>),
        "en-US",
    );

    match trigger.speak(&snapshot.transcript).await {
        PlaybackOutcome::Queued => {
            for payload in queue.drain().await {
                info!("🔊 Synthesis payload:\n{}", payload);
            }
        }
        outcome => info!("⚠️  Playback skipped: {:?}", outcome.message()),
    }

    info!("🏁 Scripted capture demo complete");

    Ok(())
}
