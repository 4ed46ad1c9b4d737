use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadVoxError {
    #[error("Audio subsystem error: {0}")]
    Audio(#[from] AudioError),

    #[error("Speech-to-text error: {0}")]
    Stt(#[from] SttError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fatal error, cannot recover: {0}")]
    Fatal(String),
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Device not found: {name:?}")]
    DeviceNotFound { name: Option<String> },

    #[error("Format not supported: {format}")]
    FormatNotSupported { format: String },

    #[error("Build stream error: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Play stream error: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("Supported stream configs error: {0}")]
    SupportedStreamConfigs(#[from] cpal::SupportedStreamConfigsError),

    #[error("Failed to finalize recording '{path}': {reason}")]
    WavWrite { path: String, reason: String },

    #[error("Fatal error, cannot recover: {0}")]
    Fatal(String),
}

#[derive(Error, Debug)]
pub enum SttError {
    #[error("Model not found at '{path}'")]
    ModelNotFound { path: String },

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("No speech-to-text backend available: {reason}")]
    BackendUnavailable { reason: String },

    #[error("Audio asset missing at '{path}'")]
    AssetMissing { path: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(String),
}

/// Capture parameters for a recording session.
///
/// The defaults match the asset contract: mono, 16-bit, 44.1 kHz.
#[derive(Debug, Clone, Copy)]
pub struct CaptureConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub silence_threshold: i16,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 1,
            silence_threshold: 100,
        }
    }
}
