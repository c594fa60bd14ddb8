//! Easing functions for timed motion.
//!
//! CSS-compatible timing functions: `linear`, the four standard `ease*`
//! curves and custom cubic beziers.
//!
//! ```
//! use timekeeper_scene::animation::easing::EasingFunction;
//!
//! let progress = EasingFunction::EaseOut.evaluate(0.5);
//! assert!(progress > 0.5);
//! ```

use serde::{Deserialize, Serialize};
use timekeeper_config::EasingName;

/// Easing function for animation timing.
///
/// Maps a linear progress value (0.0 to 1.0) to an eased output value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,

    /// CSS `ease`, equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in`, equivalent to `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out`, equivalent to `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,

    /// CSS `ease-in-out`, equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve with control points (x1, y1) and (x2, y2).
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl EasingFunction {
    /// Evaluate the easing function at progress `t` (clamped to [0, 1]).
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Create a custom cubic bezier easing function.
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

impl From<EasingName> for EasingFunction {
    fn from(name: EasingName) -> Self {
        match name {
            EasingName::Linear => Self::Linear,
            EasingName::Ease => Self::Ease,
            EasingName::EaseIn => Self::EaseIn,
            EasingName::EaseOut => Self::EaseOut,
            EasingName::EaseInOut => Self::EaseInOut,
        }
    }
}

/// Evaluate a cubic bezier curve at progress `progress`.
///
/// Newton-Raphson finds the curve parameter whose x matches the progress,
/// then the y coordinate at that parameter is returned.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_y(y1, y2, t)
}

fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f32, x2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * x1 + 3.0 * mt * t2 * x2 + t2 * t
}

#[inline]
fn bezier_y(y1: f32, y2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * y1 + 3.0 * mt * t2 * y2 + t2 * t
}

/// dx/dt = 3(1-t)²·x1 + 6(1-t)t·(x2-x1) + 3t²·(1-x2)
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.01;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::Ease,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert!(approx_eq(easing.evaluate(0.0), 0.0), "{easing:?} at 0");
            assert!(approx_eq(easing.evaluate(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert!(approx_eq(EasingFunction::Linear.evaluate(0.25), 0.25));
        assert!(EasingFunction::EaseIn.evaluate(0.5) < 0.5);
        assert!(EasingFunction::EaseOut.evaluate(0.5) > 0.5);
        assert!(approx_eq(EasingFunction::EaseInOut.evaluate(0.5), 0.5));
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(EasingFunction::Linear.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_custom_bezier_matches_named_curve() {
        let custom = EasingFunction::cubic_bezier(0.0, 0.0, 0.58, 1.0);
        for t in [0.1, 0.3, 0.6, 0.9] {
            assert!(approx_eq(custom.evaluate(t), EasingFunction::EaseOut.evaluate(t)));
        }
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_bezier_rejects_out_of_range_x() {
        EasingFunction::cubic_bezier(1.5, 0.0, 0.5, 1.0);
    }

    #[test]
    fn test_from_config_name() {
        assert_eq!(EasingFunction::from(EasingName::EaseInOut), EasingFunction::EaseInOut);
    }
}
