//! Speech-to-text abstraction layer for ReadVox.
//!
//! Backends implement the batch [`Transcriber`] trait; they are handed a
//! finalized [`AudioAsset`] strictly after capture has stopped and return
//! the raw transcript text. Real engines live in their own crates
//! (e.g. `readvox-stt-vosk`); the mock backend here drives tests.

pub mod mock;
pub mod types;

pub use mock::MockTranscriber;
pub use types::TranscriptionConfig;

use readvox_foundation::{AudioAsset, SttError};

/// Batch transcription interface.
///
/// One call per session: the whole recorded asset in, the whole raw
/// transcript out. A failure aborts the session's analysis; callers
/// surface the message verbatim and never retry.
pub trait Transcriber {
    fn transcribe(&mut self, asset: &AudioAsset) -> Result<String, SttError>;
}
