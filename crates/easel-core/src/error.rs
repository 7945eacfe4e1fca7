// File: crates/easel-core/src/error.rs
// Summary: Error type for precondition failures in chart data and transform math.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors reported when input data cannot be scaled or drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A series must hold at least one sample.
    #[error("series has no samples")]
    EmptySeries,

    /// NaN or infinite sample.
    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },

    /// Drawing a polyline over the index axis needs two samples or more.
    #[error("series has {len} sample(s), at least 2 are needed to draw")]
    TooFewSamples { len: usize },

    /// The value range is empty, inverted or non-finite, so no magnitude exists.
    #[error("cannot scale degenerate range [{low}, {high}]")]
    DegenerateRange { low: f64, high: f64 },

    /// An affine matrix with zero determinant has no inverse.
    #[error("transform is not invertible")]
    SingularTransform,
}

impl ChartError {
    pub fn degenerate(low: f64, high: f64) -> Self {
        Self::DegenerateRange { low, high }
    }
}
