use std::env;
use std::path::PathBuf;

use readvox_foundation::SttError;

/// Default location when neither the environment nor the configuration
/// names a model.
pub const DEFAULT_MODEL_DIR: &str = "models/vosk-model-small-en-us-0.15";

/// Locate the model directory: `VOSK_MODEL_PATH` wins, then the
/// configured path, then the default directory. A path that is set but
/// missing is an error rather than a silent fallthrough.
pub fn locate_model(config_path: &str) -> Result<PathBuf, SttError> {
    if let Ok(p) = env::var("VOSK_MODEL_PATH") {
        let pb = PathBuf::from(&p);
        if pb.is_dir() {
            return Ok(pb);
        }
        return Err(SttError::ModelNotFound { path: p });
    }

    if !config_path.is_empty() {
        let pb = PathBuf::from(config_path);
        if pb.is_dir() {
            return Ok(pb);
        }
        return Err(SttError::ModelNotFound {
            path: config_path.to_string(),
        });
    }

    let pb = PathBuf::from(DEFAULT_MODEL_DIR);
    if pb.is_dir() {
        tracing::debug!("Using default Vosk model at {}", pb.display());
        return Ok(pb);
    }
    Err(SttError::ModelNotFound {
        path: DEFAULT_MODEL_DIR.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path_must_exist() {
        // Only meaningful when the env override is absent.
        if env::var("VOSK_MODEL_PATH").is_ok() {
            return;
        }
        let err = locate_model("/definitely/not/a/model/dir").unwrap_err();
        assert!(matches!(err, SttError::ModelNotFound { .. }));
    }
}
