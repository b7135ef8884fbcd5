// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for transitions.
//!
//! Timing functions map linear progress `t` in `[0, 1]` onto eased progress.
//! They are used both to describe a native transition to a host and to sample
//! intermediate values when a transition is stepped manually frame by frame.

/// Timing function that controls the shape of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TimingFunction {
    /// Constant speed.
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Slow start and end, fast middle.
    #[default]
    EaseInOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    ///
    /// `x1` and `x2` are expected to lie in `[0, 1]`.
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    /// The CSS `ease` curve.
    pub const EASE: Self = Self::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Evaluates the curve at `t`.
    ///
    /// `t` is clamped into `[0, 1]` first, so the endpoints are exact.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }

    /// Interpolates between `from` and `to` at linear progress `t`.
    #[must_use]
    pub fn lerp(&self, from: f64, to: f64, t: f64) -> f64 {
        from + (to - from) * self.evaluate(t)
    }
}

// Newton-Raphson on the x polynomial, then sample y at the solved parameter.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let mut u = t;
    for _ in 0..8 {
        let x = bezier_component(u, x1, x2) - t;
        if x.abs() < 1e-7 {
            break;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - x / slope).clamp(0.0, 1.0);
    }
    bezier_component(u, y1, y2)
}

fn bezier_component(u: f64, p1: f64, p2: f64) -> f64 {
    let mu = 1.0 - u;
    3.0 * mu * mu * u * p1 + 3.0 * mu * u * u * p2 + u * u * u
}

fn bezier_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let mu = 1.0 - u;
    3.0 * mu * mu * p1 + 6.0 * mu * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}
