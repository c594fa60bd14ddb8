//! Lifecycle events for numeral ring instances.
//!
//! The engine records an event for every phase change. Hosts poll them after
//! each `observe` or `tick` call:
//!
//! ```ignore
//! engine.tick(16.0);
//! for event in engine.drain_events() {
//!     if let TransitionEvent::Removed { mode, .. } = event {
//!         println!("{mode} ring left the dial");
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::InstanceId;
use crate::clock::mode::DisplayMode;

/// Event emitted when a ring instance changes phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// First instance after a (re)mount. `animated` is false when the
    /// first-render skip placed it directly at rest.
    Mounted {
        id: InstanceId,
        mode: DisplayMode,
        animated: bool,
    },
    /// An instance began entering.
    EnterStarted { id: InstanceId, mode: DisplayMode },
    /// An entering instance reached rest and is now active.
    Entered { id: InstanceId, mode: DisplayMode },
    /// An instance began leaving.
    LeaveStarted { id: InstanceId, mode: DisplayMode },
    /// A leaving instance finished and was dropped.
    Removed { id: InstanceId, mode: DisplayMode },
    /// An instance was replaced by a new instance for the same mode.
    Superseded {
        id: InstanceId,
        mode: DisplayMode,
        replacement: InstanceId,
    },
    /// An instance was dropped without animating (remount).
    Discarded { id: InstanceId, mode: DisplayMode },
}

impl TransitionEvent {
    /// Get the instance ID for this event.
    pub fn instance_id(&self) -> InstanceId {
        match self {
            Self::Mounted { id, .. }
            | Self::EnterStarted { id, .. }
            | Self::Entered { id, .. }
            | Self::LeaveStarted { id, .. }
            | Self::Removed { id, .. }
            | Self::Superseded { id, .. }
            | Self::Discarded { id, .. } => *id,
        }
    }

    /// Get the display mode of the instance this event refers to.
    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Mounted { mode, .. }
            | Self::EnterStarted { mode, .. }
            | Self::Entered { mode, .. }
            | Self::LeaveStarted { mode, .. }
            | Self::Removed { mode, .. }
            | Self::Superseded { mode, .. }
            | Self::Discarded { mode, .. } => *mode,
        }
    }

    /// Check if this event ends an instance's life.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Removed { .. } | Self::Superseded { .. } | Self::Discarded { .. }
        )
    }
}

/// Queue for collecting events between polls.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TransitionEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn pop(&mut self) -> Option<TransitionEvent> {
        self.events.pop_front()
    }

    /// Drain all events from the queue, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    pub fn peek(&self) -> Option<&TransitionEvent> {
        self.events.front()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Events concerning a specific instance.
    pub fn events_for(&self, id: InstanceId) -> Vec<&TransitionEvent> {
        self.events.iter().filter(|e| e.instance_id() == id).collect()
    }
}
