//! Pluggable interpolation service.
//!
//! The transition engine never looks at wall-clock time or curves directly.
//! It asks an [`Interpolator`] how far a tween has progressed after a given
//! number of milliseconds and whether it has settled. Swapping the
//! interpolator changes the feel of the transition without touching the
//! lifecycle logic, and tests can plug in [`Instant`] to settle every tween
//! on the first tick.

use std::fmt::Debug;

use timekeeper_config::{AnimationConfig, MotionKind};

use super::spring::SpringConfig;
use super::transition::TransitionSpec;

/// Maps elapsed time to eased progress.
pub trait Interpolator: Debug {
    /// Progress after `elapsed_ms`: 0.0 at the start, 1.0 at the target.
    /// May leave [0, 1] for motions that overshoot.
    fn progress(&self, elapsed_ms: f32) -> f32;

    /// Whether a tween started `elapsed_ms` ago is at its target within tolerance.
    fn is_settled(&self, elapsed_ms: f32) -> bool;
}

impl<I: Interpolator + ?Sized> Interpolator for &I {
    fn progress(&self, elapsed_ms: f32) -> f32 {
        (**self).progress(elapsed_ms)
    }

    fn is_settled(&self, elapsed_ms: f32) -> bool {
        (**self).is_settled(elapsed_ms)
    }
}

impl<I: Interpolator + ?Sized> Interpolator for Box<I> {
    fn progress(&self, elapsed_ms: f32) -> f32 {
        (**self).progress(elapsed_ms)
    }

    fn is_settled(&self, elapsed_ms: f32) -> bool {
        (**self).is_settled(elapsed_ms)
    }
}

/// Completes immediately: every tween reports its target and settles on the
/// next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Instant;

impl Interpolator for Instant {
    fn progress(&self, _elapsed_ms: f32) -> f32 {
        1.0
    }

    fn is_settled(&self, _elapsed_ms: f32) -> bool {
        true
    }
}

/// Interpolator selected from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Timed(TransitionSpec),
    Spring(SpringConfig),
    Instant,
}

impl Default for Motion {
    fn default() -> Self {
        Self::Spring(SpringConfig::DEFAULT)
    }
}

impl Interpolator for Motion {
    fn progress(&self, elapsed_ms: f32) -> f32 {
        match self {
            Self::Timed(spec) => spec.progress(elapsed_ms),
            Self::Spring(spring) => spring.progress(elapsed_ms),
            Self::Instant => Instant.progress(elapsed_ms),
        }
    }

    fn is_settled(&self, elapsed_ms: f32) -> bool {
        match self {
            Self::Timed(spec) => spec.is_settled(elapsed_ms),
            Self::Spring(spring) => spring.is_settled(elapsed_ms),
            Self::Instant => Instant.is_settled(elapsed_ms),
        }
    }
}

impl From<&AnimationConfig> for Motion {
    fn from(config: &AnimationConfig) -> Self {
        match config.motion {
            MotionKind::Timed => Self::Timed(
                TransitionSpec::new(config.duration_ms).with_easing(config.easing.into()),
            ),
            MotionKind::Spring => Self::Spring(SpringConfig::from(&config.spring)),
            MotionKind::Instant => Self::Instant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::EasingFunction;

    #[test]
    fn test_instant_settles_immediately() {
        assert_eq!(Instant.progress(0.0), 1.0);
        assert!(Instant.is_settled(0.0));
    }

    #[test]
    fn test_motion_from_config() {
        let mut config = AnimationConfig::default();
        assert!(matches!(Motion::from(&config), Motion::Spring(_)));

        config.motion = MotionKind::Timed;
        config.duration_ms = 120.0;
        match Motion::from(&config) {
            Motion::Timed(spec) => {
                assert_eq!(spec.duration_ms, 120.0);
                assert_eq!(spec.easing, EasingFunction::EaseOut);
            }
            other => panic!("expected timed motion, got {other:?}"),
        }

        config.motion = MotionKind::Instant;
        assert_eq!(Motion::from(&config), Motion::Instant);
    }

    #[test]
    fn test_boxed_interpolator_delegates() {
        let boxed: Box<dyn Interpolator> = Box::new(TransitionSpec::new(100.0));
        assert!(!boxed.is_settled(50.0));
        assert!(boxed.is_settled(100.0));
    }
}
