//! Mock transcription backend for tests.

use readvox_foundation::{AudioAsset, SttError};

use crate::Transcriber;

/// Canned-output transcriber: returns a fixed transcript, or fails with a
/// fixed message, and remembers how often it was called.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    transcript: String,
    fail_with: Option<String>,
    calls: usize,
}

impl MockTranscriber {
    pub fn with_transcript(text: &str) -> Self {
        Self {
            transcript: text.to_string(),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&mut self, asset: &AudioAsset) -> Result<String, SttError> {
        self.calls += 1;
        tracing::debug!(
            "MockTranscriber call {} for {}",
            self.calls,
            asset.path.display()
        );
        if let Some(message) = &self.fail_with {
            return Err(SttError::TranscriptionFailed(message.clone()));
        }
        Ok(self.transcript.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset() -> AudioAsset {
        AudioAsset {
            path: PathBuf::from("take.wav"),
            sample_rate: 44_100,
            channels: 1,
            sample_count: 44_100,
        }
    }

    #[test]
    fn returns_the_canned_transcript() {
        let mut stt = MockTranscriber::with_transcript("the cat sat");
        assert_eq!(stt.transcribe(&asset()).unwrap(), "the cat sat");
        assert_eq!(stt.calls(), 1);
    }

    #[test]
    fn failing_mock_reports_transcription_failed() {
        let mut stt = MockTranscriber::failing("engine exploded");
        let err = stt.transcribe(&asset()).unwrap_err();
        match err {
            SttError::TranscriptionFailed(msg) => assert_eq!(msg, "engine exploded"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
