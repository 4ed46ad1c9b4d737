use hound::WavReader;
use vosk::{CompleteResult, DecodingState, Model, Recognizer};

use readvox_foundation::{AudioAsset, SttError};
use readvox_stt::{Transcriber, TranscriptionConfig};

use crate::model::locate_model;

/// Samples fed to the recognizer per call; large enough to keep the FFI
/// overhead negligible at 44.1 kHz.
const CHUNK_SAMPLES: usize = 8192;

/// Batch Vosk transcriber: loads the model once, then decodes one
/// finalized WAV per call.
pub struct VoskTranscriber {
    model: Model,
    model_path: String,
}

impl VoskTranscriber {
    pub fn new(config: &TranscriptionConfig) -> Result<Self, SttError> {
        let model_dir = locate_model(&config.model_path)?;
        let model_path = model_dir.display().to_string();

        let model = Model::new(&model_path).ok_or_else(|| SttError::TranscriptionFailed(
            format!("Failed to load Vosk model from '{}'", model_path),
        ))?;

        tracing::info!("Loaded Vosk model from {}", model_path);
        Ok(Self { model, model_path })
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    fn read_samples(asset: &AudioAsset) -> Result<Vec<i16>, SttError> {
        let mut reader = WavReader::open(&asset.path).map_err(|e| {
            SttError::TranscriptionFailed(format!(
                "Failed to open '{}': {}",
                asset.path.display(),
                e
            ))
        })?;
        reader
            .samples::<i16>()
            .collect::<Result<Vec<i16>, _>>()
            .map_err(|e| {
                SttError::TranscriptionFailed(format!(
                    "Failed to read samples from '{}': {}",
                    asset.path.display(),
                    e
                ))
            })
    }
}

fn result_text(result: CompleteResult) -> Option<String> {
    match result {
        CompleteResult::Single(single) => {
            let text = single.text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        CompleteResult::Multiple(multiple) => multiple.alternatives.first().and_then(|first| {
            let text = first.text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }),
    }
}

impl Transcriber for VoskTranscriber {
    fn transcribe(&mut self, asset: &AudioAsset) -> Result<String, SttError> {
        let samples = Self::read_samples(asset)?;

        let mut recognizer = Recognizer::new(&self.model, asset.sample_rate as f32).ok_or_else(
            || {
                SttError::TranscriptionFailed(format!(
                    "Failed to create recognizer at {} Hz",
                    asset.sample_rate
                ))
            },
        )?;

        // The recognizer may finalize segments mid-stream on long pauses;
        // collect each segment so nothing the reader said is lost.
        let mut segments: Vec<String> = Vec::new();
        for chunk in samples.chunks(CHUNK_SAMPLES) {
            let state = recognizer.accept_waveform(chunk).map_err(|e| {
                SttError::TranscriptionFailed(format!("Recognizer rejected waveform: {:?}", e))
            })?;
            if matches!(state, DecodingState::Finalized) {
                if let Some(text) = result_text(recognizer.result()) {
                    segments.push(text);
                }
            }
        }
        if let Some(text) = result_text(recognizer.final_result()) {
            segments.push(text);
        }

        let transcript = segments.join(" ");
        tracing::info!(
            "Transcribed {:.2}s of audio into {} characters",
            asset.duration_secs(),
            transcript.len()
        );
        Ok(transcript)
    }
}
