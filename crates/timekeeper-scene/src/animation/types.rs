//! Core animation types shared by the transition engine and the surface.
//!
//! - `Offset`: displacement of a numeral ring
//! - `AnimatedProps`: interpolated visual state of one numeral ring
//! - `InstanceId`: identity of one ring lifecycle
//! - `AnimationState`: state of a single tween
//! - `Phase`: lifecycle phase of a ring instance

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Signed displacement of a numeral ring in pixels.
pub type Offset = f32;

/// Instantaneous visual state of one numeral-set instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedProps {
    pub opacity: f32,
    /// Radial displacement of the outer numeral ring.
    pub outer_translate: Offset,
    /// Radial displacement of the inner (24-hour) numeral ring.
    pub inner_translate: Offset,
}

impl AnimatedProps {
    pub fn new(opacity: f32, outer_translate: Offset, inner_translate: Offset) -> Self {
        Self {
            opacity,
            outer_translate,
            inner_translate,
        }
    }

    /// True when every component is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.opacity - other.opacity).abs() <= tolerance
            && (self.outer_translate - other.outer_translate).abs() <= tolerance
            && (self.inner_translate - other.inner_translate).abs() <= tolerance
    }
}

/// Unique identifier for a numeral ring instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Generate a new unique instance ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Current state of a single tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Tween is advancing toward its target.
    #[default]
    Running,
    /// Tween reached its target.
    Finished,
    /// Tween was abandoned before reaching its target.
    Cancelled,
}

/// Lifecycle phase of a numeral ring instance.
///
/// Phases only move forward: `Entering -> Active -> Leaving -> Removed`,
/// with `Entering -> Leaving` allowed when a switch interrupts an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Entering,
    Active,
    Leaving,
    Removed,
}

impl Phase {
    /// Whether moving from `self` to `next` respects the forward-only lifecycle.
    pub fn can_advance_to(self, next: Phase) -> bool {
        next > self
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entering => "entering",
            Self::Active => "active",
            Self::Leaving => "leaving",
            Self::Removed => "removed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::new();
        let b = InstanceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_phase_order_is_forward_only() {
        assert!(Phase::Entering.can_advance_to(Phase::Active));
        assert!(Phase::Entering.can_advance_to(Phase::Leaving));
        assert!(Phase::Leaving.can_advance_to(Phase::Removed));
        assert!(!Phase::Leaving.can_advance_to(Phase::Entering));
        assert!(!Phase::Active.can_advance_to(Phase::Active));
    }
}
