//! Easing curves.
//!
//! The named curves use the same control points as the CSS keywords of the
//! same name.

use serde::Deserialize;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing
    Linear,
    /// cubic-bezier(0.42, 0, 1, 1)
    EaseIn,
    /// cubic-bezier(0, 0, 0.58, 1)
    #[default]
    EaseOut,
    /// cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    /// Arbitrary curve `[x1, y1, x2, y2]`
    CubicBezier([f64; 4]),
}

impl Easing {
    /// Eased progress for linear progress `t`. Endpoints are exact: `0 -> 0`, `1 -> 1`.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 32;

// Bezier polynomial coefficients for one axis with P0 = 0 and P3 = 1.
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn sample(p1: f64, p2: f64, t: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * t + b) * t + c) * t
}

fn slope(p1: f64, p2: f64, t: f64) -> f64 {
    let (a, b, c) = coefficients(p1, p2);
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Solves the curve's x(t) = x for t, then returns y(t).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x1 == y1 && x2 == y2 {
        return x;
    }
    sample(y1, y2, solve_t(x1, x2, x))
}

fn solve_t(x1: f64, x2: f64, x: f64) -> f64 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let d = slope(x1, x2, t);
        if d.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        let err = sample(x1, x2, t) - x;
        if err.abs() < SUBDIVISION_PRECISION {
            return t;
        }
        t -= err / d;
    }

    // Newton stalled on a flat stretch; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        let err = sample(x1, x2, t) - x;
        if err.abs() < SUBDIVISION_PRECISION {
            break;
        }
        if err > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = (lo + hi) / 2.0;
    }
    t
}
