//! Scroll parallax transforms.

use crate::error::MotionError;

/// Piecewise-linear map from an input range to an output range.
///
/// Inputs below the first stop clamp to the first output, inputs above the
/// last stop clamp to the last output.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMap {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl LinearMap {
    /// Builds a map from matching stop lists. `input` must be strictly increasing.
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self, MotionError> {
        if input.len() != output.len() {
            return Err(MotionError::RangeLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(MotionError::TooFewStops(input.len()));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(MotionError::NonFiniteStop);
        }
        if let Some(index) = input.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MotionError::UnorderedInput {
                index: index + 1,
                value: input[index + 1],
            });
        }
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Maps `value` through the stops.
    pub fn apply(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value.is_nan() || value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }
        // First stop strictly above `value`; the range checks guarantee 1..=last.
        let hi = self.input.partition_point(|&stop| stop <= value);
        let lo = hi - 1;
        let t = (value - self.input[lo]) / (self.input[hi] - self.input[lo]);
        self.output[lo] + t * (self.output[hi] - self.output[lo])
    }

    /// Input stops.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output stops.
    pub fn output(&self) -> &[f64] {
        &self.output
    }
}

/// Inline CSS offsetting a decorative layer by `offset` pixels vertically.
pub fn translate_y_style(offset: f64) -> String {
    format!("transform: translate3d(0px, {offset}px, 0px);")
}
