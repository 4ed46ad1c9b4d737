//! One analysis session: precondition check, transcription, analysis.

use readvox_analysis::{analyze, FluencyReport};
use readvox_foundation::{AudioAsset, SttError};
use readvox_stt::Transcriber;

/// Run the transcribe-then-analyze half of a session against a finalized
/// asset. The asset must exist on disk before the transcriber is invoked;
/// a recording that produced no file never reaches the engine.
pub fn run(
    transcriber: &mut dyn Transcriber,
    asset: &AudioAsset,
    reference_text: &str,
) -> Result<FluencyReport, SttError> {
    if !asset.exists() {
        return Err(SttError::AssetMissing {
            path: asset.path.display().to_string(),
        });
    }

    let transcript = transcriber.transcribe(asset)?;
    tracing::info!("Transcript: {}", transcript);

    Ok(analyze(reference_text, &transcript))
}
