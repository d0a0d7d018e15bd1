/// Fitted forward/inverse normalization pair, trained externally.
///
/// Immutable for the process lifetime; shared read-only by every call.
/// Implementations must keep `inverse` the exact inverse of `forward`
/// within the fitted range; this crate never clamps or re-fits.
pub trait ScalingTransform: Send + Sync + std::fmt::Debug {
    /// Raw price -> normalized value.
    fn forward(&self, price: f64) -> f64;

    /// Normalized value -> raw price.
    fn inverse(&self, value: f64) -> f64;
}

/// Interface for pre-trained regression models
pub trait ForecastModel: Send + Sync {
    /// Predict one normalized scalar from a width-60 normalized feature
    /// vector (one observation, ordered trailing window).
    fn infer(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
