use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use readvox_foundation::AudioError;

/// Write captured mono samples as a 16-bit PCM WAV. Fails loudly rather
/// than leaving a truncated file: finalize errors surface too.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), AudioError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let wav_err = |e: hound::Error| AudioError::WavWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let mut writer = WavWriter::create(path, spec).map_err(wav_err)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(wav_err)?;
    }
    writer.finalize().map_err(wav_err)?;

    tracing::debug!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}
