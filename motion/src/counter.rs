//! Count-up timeline for the animated statistics.

use crate::error::{MotionError, check_seconds};
use crate::frame::{Sample, Timeline};

/// Default count-up length in seconds.
pub const DEFAULT_DURATION: f64 = 2.0;

/// Interpolates an integer from `from` to `to` over `duration` seconds.
///
/// Each frame shows `floor(from + progress * (to - from))`; the final frame
/// shows exactly `to`. Values move monotonically toward `to` whatever the
/// frame timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    from: i64,
    to: i64,
    duration: f64,
}

impl CountUp {
    /// Builds a count-up. `duration` is in seconds; zero completes on the first frame.
    pub fn new(from: i64, to: i64, duration: f64) -> Result<Self, MotionError> {
        let duration = check_seconds("counter duration", duration)?;
        Ok(Self { from, to, duration })
    }

    /// Start value.
    pub fn from(&self) -> i64 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> i64 {
        self.to
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    fn progress(&self, elapsed: f64) -> f64 {
        if self.duration == 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }
}

impl Timeline for CountUp {
    type Value = i64;

    fn sample(&self, elapsed: f64) -> Sample<i64> {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return Sample {
                value: self.to,
                done: true,
            };
        }
        // Wide ranges overflow i64 subtraction.
        let span = self.to as f64 - self.from as f64;
        let value = (self.from as f64 + progress * span).floor() as i64;
        Sample { value, done: false }
    }

    fn initial(&self) -> i64 {
        self.from
    }
}
