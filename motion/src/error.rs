//! Error type for the motion core.

use thiserror::Error;

/// Everything that can go wrong while building timelines, transforms or config.
#[derive(Debug, Error)]
pub enum MotionError {
    /// A piecewise-linear map needs at least two stops to interpolate between.
    #[error("interpolation needs at least two stops, got {0}")]
    TooFewStops(usize),

    /// Input and output ranges must pair up one to one.
    #[error("input range has {input} stops but output range has {output}")]
    RangeLengthMismatch {
        /// Number of input stops
        input: usize,
        /// Number of output stops
        output: usize,
    },

    /// NaN or infinite values in a range.
    #[error("range stops must be finite numbers")]
    NonFiniteStop,

    /// Input stops must strictly increase.
    #[error("input range must be strictly increasing (stop {index} is {value})")]
    UnorderedInput {
        /// Index of the offending stop
        index: usize,
        /// Its value
        value: f64,
    },

    /// Durations and delays are seconds, finite and non-negative.
    #[error("{what} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration {
        /// Which setting was rejected
        what: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A parallax layer was requested that the config does not define.
    #[error("unknown parallax layer `{0}`")]
    UnknownLayer(String),

    /// The TOML document could not be parsed.
    #[error("failed to parse motion config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Checks a seconds value used as a duration or delay.
pub(crate) fn check_seconds(what: &'static str, value: f64) -> Result<f64, MotionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MotionError::InvalidDuration { what, value })
    }
}
