use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

use super::model::ForecastModel;
use crate::domain::errors::ForecastError;
use crate::domain::prices::WINDOW;

/// ONNX Runtime backend: a pre-trained graph taking one `[1, 60]` f32
/// observation and returning one normalized scalar.
///
/// A missing or corrupt graph is fatal at load time; there is no neutral
/// fallback, the shell must refuse to start instead.
#[derive(Debug)]
pub struct OnnxModel {
    session: Mutex<Session>,
    model_path: PathBuf,
}

impl OnnxModel {
    pub fn load(model_path: &Path) -> Result<Self, ForecastError> {
        if !model_path.exists() {
            return Err(ForecastError::artifact(
                "model",
                format!("file not found: {}", model_path.display()),
            ));
        }

        let session = Session::builder()
            .map_err(|e| ForecastError::artifact("model", format!("session builder failed: {e}")))?
            .commit_from_file(model_path)
            .map_err(|e| ForecastError::artifact("model", format!("failed to load graph: {e}")))?;

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

impl ForecastModel for OnnxModel {
    fn infer(&self, features: &[f64]) -> Result<f64, String> {
        let flat_data: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let shape = vec![1, WINDOW];

        let input_value = ort::value::Value::from_array((shape.as_slice(), flat_data))
            .map_err(|e| format!("Input value creation failed: {}", e))?;

        let inputs = ort::inputs![input_value];

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Mutex lock failed: {}", e))?;

        match session.run(inputs) {
            Ok(outputs) => {
                let output_value = outputs
                    .iter()
                    .next()
                    .map(|(_, v)| v)
                    .ok_or("No output found")?;
                let data = output_value
                    .try_extract_tensor::<f32>()
                    .map_err(|e| e.to_string())?;
                Ok(*data.1.iter().next().ok_or("Empty output")? as f64)
            }
            Err(e) => Err(e.to_string()),
        }
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_graph_is_fatal() {
        let err = OnnxModel::load(&PathBuf::from("non_existent.onnx")).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::ArtifactUnavailable { .. }
        ));
        assert!(err.to_string().contains("non_existent.onnx"));
    }
}
