use super::errors::ForecastError;

/// Number of trailing closing prices the model was trained on.
/// This width is a contract with the pre-fitted artifacts: any change here
/// is a breaking change for every deployed model and scaler.
pub const WINDOW: usize = 60;

/// An ordered window of exactly [`WINDOW`] finite closing prices,
/// oldest first, most recent last.
///
/// Construction is the only validation point: once a `PriceSeries` exists,
/// the pipeline may assume shape and finiteness. `0.0` is an ordinary
/// price, not a missing-value marker; filling in gaps is the shell's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self, ForecastError> {
        if prices.len() != WINDOW {
            return Err(ForecastError::wrong_length(prices.len()));
        }
        for (index, price) in prices.iter().enumerate() {
            if !price.is_finite() {
                return Err(ForecastError::NonFinitePrice { index });
            }
        }
        Ok(Self(prices))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Most recent closing price in the window.
    pub fn latest(&self) -> f64 {
        self.0[WINDOW - 1]
    }
}
