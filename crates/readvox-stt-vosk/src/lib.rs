//! Vosk speech recognition backend for ReadVox.
//!
//! The engine binding is feature-gated behind "vosk" so the default
//! workspace build carries no native library requirement. Without the
//! feature, [`create_transcriber`] reports the backend as unavailable
//! before any recording starts.

pub mod model;

#[cfg(feature = "vosk")]
pub mod vosk_transcriber;

#[cfg(feature = "vosk")]
pub use vosk_transcriber::VoskTranscriber;

pub use model::locate_model;

use readvox_foundation::SttError;
use readvox_stt::{Transcriber, TranscriptionConfig};

#[cfg(feature = "vosk")]
pub fn create_transcriber(config: &TranscriptionConfig) -> Result<Box<dyn Transcriber>, SttError> {
    Ok(Box::new(VoskTranscriber::new(config)?))
}

#[cfg(not(feature = "vosk"))]
pub fn create_transcriber(_config: &TranscriptionConfig) -> Result<Box<dyn Transcriber>, SttError> {
    Err(SttError::BackendUnavailable {
        reason: "built without the 'vosk' feature; rebuild with --features vosk".to_string(),
    })
}
