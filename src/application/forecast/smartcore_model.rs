use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::path::{Path, PathBuf};
use tracing::info;

use super::model::ForecastModel;
use crate::domain::errors::ForecastError;

type FittedRegression = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Pre-trained smartcore linear regressor over the 60-wide normalized
/// window, deserialized from a JSON artifact.
#[derive(Debug)]
pub struct SmartcoreModel {
    model: FittedRegression,
    model_path: PathBuf,
}

impl SmartcoreModel {
    pub fn load(model_path: &Path) -> Result<Self, ForecastError> {
        if !model_path.exists() {
            return Err(ForecastError::artifact(
                "model",
                format!("file not found: {}", model_path.display()),
            ));
        }

        let bytes = std::fs::read(model_path).map_err(|e| {
            ForecastError::artifact("model", format!("failed to read {}: {e}", model_path.display()))
        })?;

        let model: FittedRegression = serde_json::from_slice(&bytes).map_err(|e| {
            ForecastError::artifact("model", format!("failed to deserialize: {e}"))
        })?;

        info!("Successfully loaded regression model from {:?}", model_path);
        Ok(Self {
            model,
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

impl ForecastModel for SmartcoreModel {
    fn infer(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
