use std::sync::Arc;
use tracing::debug;

use super::model::{ForecastModel, ScalingTransform};
use crate::domain::errors::ForecastError;
use crate::domain::prices::PriceSeries;

/// scale -> width-60 feature vector -> infer -> inverse-scale.
///
/// Pure per call: no caching, no mutation, no retry. The artifacts are
/// loaded once at startup and shared read-only; concurrent sessions may
/// call `predict` without any locking discipline of their own.
pub struct ForecastPipeline {
    scaler: Arc<dyn ScalingTransform>,
    model: Arc<dyn ForecastModel>,
}

impl ForecastPipeline {
    pub fn new(scaler: Arc<dyn ScalingTransform>, model: Arc<dyn ForecastModel>) -> Self {
        Self { scaler, model }
    }

    /// One-step-ahead forecast for a validated 60-price window.
    pub fn predict(&self, series: &PriceSeries) -> Result<f64, ForecastError> {
        // One observation, 60 ordered features; order must survive scaling.
        let normalized: Vec<f64> = series
            .values()
            .iter()
            .map(|price| self.scaler.forward(*price))
            .collect();

        let output = self
            .model
            .infer(&normalized)
            .map_err(|reason| ForecastError::artifact("model", reason))?;

        let predicted = self.scaler.inverse(output);
        debug!(
            model = self.model.name(),
            latest = series.latest(),
            predicted,
            "forecast computed"
        );
        Ok(predicted)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
