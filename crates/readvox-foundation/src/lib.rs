//! Foundation types for ReadVox: error enums shared across the workspace
//! and the `AudioAsset` vocabulary type that the audio and STT crates
//! exchange.

pub mod asset;
pub mod error;

pub use asset::AudioAsset;
pub use error::{AudioError, CaptureConfig, ConfigError, ReadVoxError, SttError};
