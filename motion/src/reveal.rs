//! Entrance animations: fade in from an offset, or scale up into place.
//!
//! A [`Reveal`] is a [`Timeline`] of [`Pose`]s. It holds its starting pose
//! while waiting out the delay, eases toward [`Pose::REST`] over the
//! duration, and lands on `REST` exactly. It never plays backwards.

use serde::Deserialize;

use crate::easing::Easing;
use crate::error::{MotionError, check_seconds};
use crate::frame::{Sample, Timeline};

/// Default slide distance in pixels.
pub const DEFAULT_DISTANCE: f64 = 40.0;
/// Default reveal length in seconds.
pub const DEFAULT_DURATION: f64 = 0.8;

/// Which way content travels as it fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rises from below
    #[default]
    Up,
    /// Drops from above
    Down,
    /// Slides in from the right, moving left
    Left,
    /// Slides in from the left, moving right
    Right,
}

impl Direction {
    /// Starting `(x, y)` offset for a reveal of `distance` pixels.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
        }
    }
}

/// Visual state of revealed content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// 0 = invisible, 1 = opaque
    pub opacity: f64,
    /// Horizontal offset in pixels
    pub x: f64,
    /// Vertical offset in pixels
    pub y: f64,
    /// Uniform scale
    pub scale: f64,
}

impl Pose {
    /// Fully visible, in place.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Invisible, pushed `distance` pixels away in `direction`.
    pub fn hidden(direction: Direction, distance: f64) -> Self {
        let (x, y) = direction.offset(distance);
        Pose {
            opacity: 0.0,
            x,
            y,
            scale: 1.0,
        }
    }

    /// Invisible and shrunk to `scale`.
    pub fn shrunk(scale: f64) -> Self {
        Pose {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    /// Linear blend between two poses.
    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Inline CSS for this pose.
    pub fn to_style(self) -> String {
        let mut style = format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0px)",
            self.opacity, self.x, self.y
        );
        if self.scale != 1.0 {
            style.push_str(&format!(" scale({})", self.scale));
        }
        style.push(';');
        style
    }
}

/// Eases from a starting pose to [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    from: Pose,
    duration: f64,
    delay: f64,
    easing: Easing,
}

impl Reveal {
    /// Fade in while sliding `distance` pixels in `direction`.
    pub fn fade(direction: Direction, distance: f64) -> Self {
        Self {
            from: Pose::hidden(direction, distance),
            duration: DEFAULT_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while scaling up from `scale`.
    pub fn scale_from(scale: f64) -> Self {
        Self {
            from: Pose::shrunk(scale),
            duration: DEFAULT_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Set the length in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Result<Self, MotionError> {
        self.duration = check_seconds("reveal duration", seconds)?;
        Ok(self)
    }

    /// Set the wait before motion starts, in seconds.
    pub fn with_delay(mut self, seconds: f64) -> Result<Self, MotionError> {
        self.delay = check_seconds("reveal delay", seconds)?;
        Ok(self)
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Starting pose.
    pub fn from_pose(&self) -> Pose {
        self.from
    }

    /// Length in seconds, excluding the delay.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Wait before motion starts, in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }
}

impl Timeline for Reveal {
    type Value = Pose;

    fn sample(&self, elapsed: f64) -> Sample<Pose> {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return Sample {
                value: self.from,
                done: false,
            };
        }
        let progress = if self.duration == 0.0 {
            1.0
        } else {
            (t / self.duration).min(1.0)
        };
        if progress >= 1.0 {
            return Sample {
                value: Pose::REST,
                done: true,
            };
        }
        Sample {
            value: self.from.lerp(Pose::REST, self.easing.apply(progress)),
            done: false,
        }
    }

    fn initial(&self) -> Pose {
        self.from
    }
}
