//! Artifact store adapter: loads the pre-fitted scaler and regression
//! model once at process start. Any failure here is fatal — the shell
//! must not start without usable artifacts.

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::application::forecast::onnx_model::OnnxModel;
use crate::application::forecast::scaler::MinMaxScaler;
use crate::application::forecast::smartcore_model::SmartcoreModel;
use crate::application::forecast::{ForecastModel, ForecastPipeline, ScalingTransform};
use crate::config::{Config, ModelBackend};
use crate::domain::errors::ForecastError;

pub fn load_scaler(path: &Path) -> Result<Arc<dyn ScalingTransform>, ForecastError> {
    if !path.exists() {
        return Err(ForecastError::artifact(
            "scaler",
            format!("file not found: {}", path.display()),
        ));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        ForecastError::artifact("scaler", format!("failed to read {}: {e}", path.display()))
    })?;

    let scaler: MinMaxScaler = serde_json::from_slice(&bytes)
        .map_err(|e| ForecastError::artifact("scaler", format!("failed to deserialize: {e}")))?;
    let scaler = scaler.validated()?;

    info!("Successfully loaded scaling transform from {:?}", path);
    Ok(Arc::new(scaler))
}

pub fn load_model(config: &Config) -> Result<Arc<dyn ForecastModel>, ForecastError> {
    match config.model_backend {
        ModelBackend::Smartcore => {
            Ok(Arc::new(SmartcoreModel::load(&config.model_path)?))
        }
        ModelBackend::Onnx => Ok(Arc::new(OnnxModel::load(&config.onnx_model_path)?)),
    }
}

/// Build the process-wide pipeline from the configured artifact paths.
pub fn build_pipeline(config: &Config) -> Result<ForecastPipeline, ForecastError> {
    let scaler = load_scaler(&config.scaler_path)?;
    let model = load_model(config)?;
    info!("Forecast pipeline ready (backend: {})", model.name());
    Ok(ForecastPipeline::new(scaler, model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_scaler_is_artifact_unavailable() {
        let err = load_scaler(Path::new("does_not_exist/scaler.json")).unwrap_err();
        assert!(matches!(err, ForecastError::ArtifactUnavailable { .. }));
    }

    #[test]
    fn test_corrupt_scaler_is_artifact_unavailable() {
        let dir = std::env::temp_dir().join("riskinvest_test_corrupt_scaler");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scaler.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = load_scaler(&path).unwrap_err();
        assert!(matches!(err, ForecastError::ArtifactUnavailable { .. }));
    }

    #[test]
    fn test_valid_scaler_loads() {
        let dir = std::env::temp_dir().join("riskinvest_test_valid_scaler");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scaler.json");
        std::fs::write(&path, r#"{"data_min": 10.0, "data_max": 500.0}"#).unwrap();

        let scaler = load_scaler(&path).unwrap();
        assert_eq!(scaler.forward(10.0), 0.0);
        assert_eq!(scaler.inverse(1.0), 500.0);
    }
}
