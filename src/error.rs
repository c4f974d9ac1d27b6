use thiserror::Error;

/// Failures raised before any bound is computed.
///
/// Every variant is a synchronous precondition failure: no partial band is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandError {
    /// `f`, `x` or an ensemble realization disagree in length.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A scalar parameter is outside its admissible range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The Student-t branch needs at least two realizations (df = N - 1 > 0).
    #[error("insufficient samples: got {got}, need at least {required}")]
    InsufficientSamples { got: usize, required: usize },

    /// The statistics backend rejected a distribution parameterization.
    #[error("distribution error: {0}")]
    Distribution(String),
}

impl BandError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ShapeMismatch(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
