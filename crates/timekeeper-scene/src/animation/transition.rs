//! Timed transitions and the tween that drives one ring instance.
//!
//! - `TransitionSpec`: fixed-duration motion with delay and easing
//! - `ActiveTransition`: runtime state of one in-flight tween between two
//!   [`AnimatedProps`] snapshots

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use super::interpolator::Interpolator;
use super::types::{AnimatedProps, AnimationState};

/// Fixed-duration motion, similar to a CSS `transition` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Duration of the transition in milliseconds.
    pub duration_ms: f32,
    /// Delay before the transition starts in milliseconds.
    pub delay_ms: f32,
    /// Easing function for the transition timing.
    pub easing: EasingFunction,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: EasingFunction::EaseOut,
        }
    }
}

impl TransitionSpec {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            ..Self::default()
        }
    }

    /// Set the delay for this transition.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Set the easing function for this transition.
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress (0.0 to 1.0) ignoring easing.
    pub fn linear_progress(&self, elapsed_ms: f32) -> f32 {
        let active_elapsed = (elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms > 0.0 {
            (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

impl Interpolator for TransitionSpec {
    fn progress(&self, elapsed_ms: f32) -> f32 {
        self.easing.evaluate(self.linear_progress(elapsed_ms))
    }

    fn is_settled(&self, elapsed_ms: f32) -> bool {
        elapsed_ms - self.delay_ms >= self.duration_ms
    }
}

/// A tween in progress between two props snapshots.
///
/// The tween does not own its timing curve; the engine passes its
/// interpolator on every call so all instances share one motion.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    /// Starting value of the transition.
    pub from_value: AnimatedProps,
    /// Target value of the transition.
    pub to_value: AnimatedProps,
    /// Time elapsed since the tween was (re)started in milliseconds.
    pub elapsed_ms: f32,
    /// Current state of the tween.
    pub state: AnimationState,
}

impl ActiveTransition {
    /// Create a running tween.
    pub fn new(from_value: AnimatedProps, to_value: AnimatedProps) -> Self {
        Self {
            from_value,
            to_value,
            elapsed_ms: 0.0,
            state: AnimationState::Running,
        }
    }

    /// A tween that is already at rest on `value`.
    pub fn settled(value: AnimatedProps) -> Self {
        Self {
            from_value: value,
            to_value: value,
            elapsed_ms: 0.0,
            state: AnimationState::Finished,
        }
    }

    /// Get the current interpolated value of the tween.
    pub fn current_value(&self, interpolator: &impl Interpolator) -> AnimatedProps {
        match self.state {
            AnimationState::Finished => self.to_value,
            AnimationState::Running | AnimationState::Cancelled => {
                let progress = interpolator.progress(self.elapsed_ms);
                self.from_value.interpolate(&self.to_value, progress)
            }
        }
    }

    /// Advance the tween by `delta_ms`.
    ///
    /// Returns `true` while the tween is still running, `false` once it has
    /// finished or was cancelled.
    pub fn update(&mut self, delta_ms: f32, interpolator: &impl Interpolator) -> bool {
        match self.state {
            AnimationState::Finished | AnimationState::Cancelled => false,
            AnimationState::Running => {
                self.elapsed_ms += delta_ms.max(0.0);
                if interpolator.is_settled(self.elapsed_ms) {
                    self.state = AnimationState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Cancel the tween, freezing it at its current position.
    pub fn cancel(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Cancelled;
        }
    }

    /// Retarget the tween to a new destination value.
    ///
    /// The tween continues from its current value to the new target with its
    /// clock reset.
    pub fn retarget(&mut self, new_to_value: AnimatedProps, interpolator: &impl Interpolator) {
        self.from_value = self.current_value(interpolator);
        self.to_value = new_to_value;
        self.elapsed_ms = 0.0;
        self.state = AnimationState::Running;
    }

    /// Check if this tween is still running.
    pub fn is_active(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Check if this tween has completed successfully.
    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }
}
