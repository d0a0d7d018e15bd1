use serde::{Deserialize, Serialize};

use super::model::ScalingTransform;
use crate::domain::errors::ForecastError;

/// Fitted min-max scaler, loaded from a JSON artifact.
///
/// `forward` maps the fitted range onto [0, 1]; `inverse` maps back.
/// Values outside the fitted range extrapolate linearly, unchanged —
/// matching the transform the model saw during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    data_min: f64,
    data_max: f64,
}

impl MinMaxScaler {
    pub fn new(data_min: f64, data_max: f64) -> Result<Self, ForecastError> {
        if !data_min.is_finite() || !data_max.is_finite() {
            return Err(ForecastError::artifact(
                "scaler",
                "fitted bounds must be finite",
            ));
        }
        if data_max <= data_min {
            return Err(ForecastError::artifact(
                "scaler",
                format!("degenerate fit: data_max {data_max} <= data_min {data_min}"),
            ));
        }
        Ok(Self { data_min, data_max })
    }

    /// Validate bounds after deserialization; a corrupt artifact must not
    /// silently produce NaN per-call.
    pub fn validated(self) -> Result<Self, ForecastError> {
        Self::new(self.data_min, self.data_max)
    }
}

impl ScalingTransform for MinMaxScaler {
    fn forward(&self, price: f64) -> f64 {
        (price - self.data_min) / (self.data_max - self.data_min)
    }

    fn inverse(&self, value: f64) -> f64 {
        value * (self.data_max - self.data_min) + self.data_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(a: f64, b: f64) -> f64 {
        if b == 0.0 {
            a.abs()
        } else {
            ((a - b) / b).abs()
        }
    }

    #[test]
    fn test_round_trip_within_fitted_range() {
        let scaler = MinMaxScaler::new(50.0, 250.0).unwrap();
        for price in [50.0, 50.01, 100.0, 123.4567, 199.99, 250.0] {
            let back = scaler.inverse(scaler.forward(price));
            assert!(relative_error(back, price) < 1e-9, "price {price} -> {back}");
        }
    }

    #[test]
    fn test_extrapolation_is_not_clamped() {
        let scaler = MinMaxScaler::new(0.0, 100.0).unwrap();
        assert!(scaler.forward(150.0) > 1.0);
        assert!(scaler.forward(-10.0) < 0.0);
        assert_eq!(scaler.inverse(1.5), 150.0);
    }

    #[test]
    fn test_degenerate_fit_rejected() {
        assert!(MinMaxScaler::new(10.0, 10.0).is_err());
        assert!(MinMaxScaler::new(10.0, 5.0).is_err());
        assert!(MinMaxScaler::new(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_json_artifact_round_trip() {
        let scaler = MinMaxScaler::new(12.5, 980.0).unwrap();
        let json = serde_json::to_string(&scaler).unwrap();
        let loaded: MinMaxScaler = serde_json::from_str(&json).unwrap();
        let loaded = loaded.validated().unwrap();
        assert_eq!(loaded.forward(12.5), 0.0);
        assert_eq!(loaded.forward(980.0), 1.0);
    }
}
