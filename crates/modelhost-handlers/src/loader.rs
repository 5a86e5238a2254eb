//! Model artifact loading
//!
//! The hosting runtime calls [`load`] once per worker process, pointing at
//! the directory the deployment unpacked the trained artifact into.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use modelhost_core::{Error, Result};

use crate::artifact::ModelArtifact;
use crate::predictor::Predictor;

/// Artifact filename inside the model directory
pub const MODEL_FILE: &str = "model.joblib";

/// Deserialize the fitted model from `<model_dir>/model.joblib`
///
/// Fails with a model error when the file is missing or its body is not a
/// valid serialized [`ModelArtifact`]. No side effects beyond file I/O.
pub fn load(model_dir: impl AsRef<Path>) -> Result<Box<dyn Predictor>> {
    let path = model_dir.as_ref().join(MODEL_FILE);
    if !path.exists() {
        return Err(Error::model(format!(
            "model artifact not found: {}",
            path.display()
        )));
    }

    let file = File::open(&path)?;
    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::model(format!("failed to deserialize {}: {e}", path.display())))?;

    tracing::info!("Loaded model '{}' from {}", artifact.name(), path.display());

    Ok(Box::new(artifact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_round_trips_a_written_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ModelArtifact::LinearRegressor {
            coefficients: vec![2.0],
            intercept: 1.0,
        };
        std::fs::write(
            dir.path().join(MODEL_FILE),
            serde_json::to_vec(&artifact).unwrap(),
        )
        .unwrap();

        let model = load(dir.path()).unwrap();
        assert_eq!(model.name(), "linear_regressor");
        assert_eq!(model.predict(&json!([[3]])).unwrap(), json!([7.0]));
    }

    #[test]
    fn test_load_fails_when_path_does_not_exist() {
        let err = load("/nonexistent/model/dir").unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn test_load_fails_when_directory_has_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn test_load_fails_on_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), b"not a model").unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }
}
