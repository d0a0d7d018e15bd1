//! Configuration module for riskinvest.
//!
//! Structured configuration loading from environment variables: which
//! model backend to run and where the pre-fitted artifacts live.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Inference backend for the pre-trained forecast model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBackend {
    Smartcore,
    Onnx,
}

impl FromStr for ModelBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smartcore" => Ok(ModelBackend::Smartcore),
            "onnx" => Ok(ModelBackend::Onnx),
            _ => anyhow::bail!(
                "Invalid MODEL_BACKEND: {}. Must be 'smartcore' or 'onnx'",
                s
            ),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_backend: ModelBackend,
    pub model_path: PathBuf,
    pub onnx_model_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    /// pointing at the `artifacts/` directory.
    pub fn from_env() -> Result<Self> {
        let backend_str = env::var("MODEL_BACKEND").unwrap_or_else(|_| "smartcore".to_string());
        let model_backend = ModelBackend::from_str(&backend_str)?;

        let model_path = env::var("MODEL_PATH")
            .unwrap_or_else(|_| "artifacts/riskinvest_model.json".to_string())
            .into();
        let onnx_model_path = env::var("ONNX_MODEL_PATH")
            .unwrap_or_else(|_| "artifacts/riskinvest_model.onnx".to_string())
            .into();
        let scaler_path = env::var("SCALER_PATH")
            .unwrap_or_else(|_| "artifacts/scaler.json".to_string())
            .into();

        Ok(Self {
            model_backend,
            model_path,
            onnx_model_path,
            scaler_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert!(matches!(
            ModelBackend::from_str("smartcore").unwrap(),
            ModelBackend::Smartcore
        ));
        assert!(matches!(
            ModelBackend::from_str("ONNX").unwrap(),
            ModelBackend::Onnx
        ));
        assert!(ModelBackend::from_str("pytorch").is_err());
    }
}
