//! Animation primitives for the numeral ring transition.
//!
//! - **Interpolation**: [`Interpolate`] for props snapshots
//! - **Motion**: the [`Interpolator`] service with timed, spring and instant
//!   implementations
//! - **Tweens**: [`ActiveTransition`] between two props snapshots
//! - **Events**: lifecycle events queued by the transition engine

pub mod easing;
pub mod events;
pub mod interpolate;
pub mod interpolator;
pub mod spring;
pub mod transition;
pub mod types;

pub use easing::EasingFunction;
pub use events::{EventQueue, TransitionEvent};
pub use interpolate::Interpolate;
pub use interpolator::{Instant, Interpolator, Motion};
pub use spring::SpringConfig;
pub use transition::{ActiveTransition, TransitionSpec};
pub use types::{AnimatedProps, AnimationState, InstanceId, Offset, Phase};
