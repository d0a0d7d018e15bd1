use thiserror::Error;

use super::prices::WINDOW;

/// Errors surfaced by the forecast pipeline and artifact loading.
///
/// The intent responder has no error type: it is total over its input
/// domain (the default rule always matches).
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid input shape: expected {expected} prices, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },

    #[error("Non-finite price at position {index}: prices must be finite reals")]
    NonFinitePrice { index: usize },

    #[error("Artifact unavailable ({what}): {reason}")]
    ArtifactUnavailable { what: String, reason: String },
}

impl ForecastError {
    /// Wrong-length series against the fixed 60-price window.
    pub fn wrong_length(actual: usize) -> Self {
        Self::InvalidInputShape {
            expected: WINDOW,
            actual,
        }
    }

    pub fn artifact(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArtifactUnavailable {
            what: what.into(),
            reason: reason.into(),
        }
    }
}
