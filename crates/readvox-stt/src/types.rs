//! Configuration for transcription backends.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Path to the model directory. Backends resolve an empty path
    /// through their own discovery (environment variable, then default
    /// location).
    pub model_path: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        let model_path = std::env::var("READVOX_MODEL_PATH").unwrap_or_default();
        Self { model_path }
    }
}
