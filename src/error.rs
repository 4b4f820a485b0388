//! Error type shared by every normalization entry point.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors that can occur while building input or normalizing it.
///
/// Every error is returned to the immediate caller; normalization is a pure
/// computation and nothing here is transient.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Granularity must be a positive finite number.
    #[error("granularity must be positive and finite, got {0}")]
    InvalidGranularity(f64),
    /// A fixed origin must be a finite index.
    #[error("origin must be finite, got {0}")]
    InvalidOrigin(f64),
    /// The index span needs more output slots than a grid may hold.
    #[error("index span needs {slots} slots, more than the limit of {limit}")]
    TooManySlots {
        /// Slots the span would need.
        slots: f64,
        /// Largest slot count allowed.
        limit: usize,
    },
    /// The input contained no series or no points at all.
    #[error("input contains no data points")]
    EmptyInput,
    /// A point index was NaN or infinite.
    #[error("series {series}, point {position}: index is not finite")]
    NonFiniteIndex {
        /// Series position within the input.
        series: usize,
        /// Point position within the series.
        position: usize,
    },
    /// A point index lies before the configured origin.
    #[error("series {series}, point {position}: index {index} lies before origin {origin}")]
    IndexBeforeOrigin {
        /// Series position within the input.
        series: usize,
        /// Point position within the series.
        position: usize,
        /// Offending index.
        index: f64,
        /// Origin of the output grid.
        origin: f64,
    },
    /// Indices decreased within a series while strict ordering was requested.
    #[error("series {series}, point {position}: index is smaller than its predecessor")]
    NonMonotonicIndex {
        /// Series position within the input.
        series: usize,
        /// Point position within the series.
        position: usize,
    },
    /// A point could not be decoded from external input.
    #[error("series {series}, point {position}: {reason}")]
    MalformedPoint {
        /// Series position within the input.
        series: usize,
        /// Point position within the series.
        position: usize,
        /// What was wrong with the point.
        reason: String,
    },
    /// The external input was not a series or a list of series.
    #[error("unsupported input shape: {0}")]
    InvalidShape(String),
    /// The external input was not valid JSON.
    #[cfg(feature = "serde")]
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_point() {
        let err = NormalizeError::NonFiniteIndex {
            series: 1,
            position: 3,
        };
        assert_eq!(err.to_string(), "series 1, point 3: index is not finite");

        let err = NormalizeError::InvalidGranularity(-2.0);
        assert_eq!(
            err.to_string(),
            "granularity must be positive and finite, got -2"
        );
    }
}
