use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub mod render;
pub mod session;

/// The passage shown to the reader when no configuration overrides it.
pub const DEFAULT_REFERENCE_TEXT: &str = "The sun rose slowly over the quiet town.\
A small bird hopped quickly across the path.\
Cool rain fell softly on the empty street.";

const DEFAULT_OUTPUT_WAV: &str = "manual_record.wav";
const DEFAULT_SILENCE_THRESHOLD: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// The passage the reader is asked to read aloud.
    pub reference_text: String,
    /// Input device name; None lets the host pick.
    pub device: Option<String>,
    /// Where the recorded take is written.
    pub output_wav: String,
    /// RMS threshold below which a chunk counts as silent.
    pub silence_threshold: i16,
    /// Model directory for the speech-to-text backend; empty means the
    /// backend's own discovery applies.
    pub model_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            reference_text: DEFAULT_REFERENCE_TEXT.to_string(),
            device: None,
            output_wav: DEFAULT_OUTPUT_WAV.to_string(),
            silence_threshold: DEFAULT_SILENCE_THRESHOLD as i16,
            model_path: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from a specific config file path (for tests)
    pub fn from_path(config_path: impl AsRef<Path>) -> Result<Self, String> {
        let builder = Self::builder_with_defaults()
            .add_source(File::from(config_path.as_ref()).required(true))
            .add_source(Self::env_source());
        Self::finish(builder)
    }

    pub fn new() -> Result<Self, String> {
        let mut builder = Self::builder_with_defaults();

        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            tracing::info!("Loading configuration from: {}", config_path.display());
            builder = builder.add_source(File::from(config_path).required(true));
        } else {
            tracing::info!(
                "No configuration file at 'config/default.toml'. Using defaults and environment variables."
            );
        }

        builder = builder.add_source(Self::env_source());
        Self::finish(builder)
    }

    fn builder_with_defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            .set_default("reference_text", DEFAULT_REFERENCE_TEXT)
            .unwrap()
            .set_default("output_wav", DEFAULT_OUTPUT_WAV)
            .unwrap()
            .set_default("silence_threshold", DEFAULT_SILENCE_THRESHOLD)
            .unwrap()
            .set_default("model_path", "")
            .unwrap()
    }

    fn env_source() -> Environment {
        // Environment variables override the file's settings.
        Environment::with_prefix("READVOX").separator("__")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, String> {
        let config = builder
            .build()
            .map_err(|e| format!("Failed to build config: {}", e))?;
        let mut settings: Settings = config
            .try_deserialize()
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings.validate();
        Ok(settings)
    }

    fn validate(&mut self) {
        if self.reference_text.trim().is_empty() {
            tracing::warn!("Empty reference_text; falling back to the built-in passage.");
            self.reference_text = DEFAULT_REFERENCE_TEXT.to_string();
        }
        if self.silence_threshold < 0 {
            tracing::warn!(
                "Negative silence_threshold {}; clamping to {}.",
                self.silence_threshold,
                DEFAULT_SILENCE_THRESHOLD
            );
            self.silence_threshold = DEFAULT_SILENCE_THRESHOLD as i16;
        }
        if self.output_wav.trim().is_empty() {
            tracing::warn!("Empty output_wav; falling back to '{}'.", DEFAULT_OUTPUT_WAV);
            self.output_wav = DEFAULT_OUTPUT_WAV.to_string();
        }
    }
}
