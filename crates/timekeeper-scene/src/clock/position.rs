//! Ring offsets for each display mode.
//!
//! A ring enters from the slot of the mode it replaces and leaves toward its
//! own slot, so a switch reads as one continuous sweep instead of two
//! independent fades.

use timekeeper_config::LayoutConfig;

use super::mode::DisplayMode;
use crate::animation::types::{AnimatedProps, Offset};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPolicy {
    pub hour_offset: Offset,
    pub minute_offset: Offset,
    pub inner_rest: Offset,
    pub inner_offstage: Offset,
}

impl Default for PositionPolicy {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for PositionPolicy {
    fn from(layout: &LayoutConfig) -> Self {
        Self {
            hour_offset: layout.hour_offset,
            minute_offset: layout.minute_offset,
            inner_rest: layout.inner_rest,
            inner_offstage: layout.inner_offstage,
        }
    }
}

impl PositionPolicy {
    /// Slot a ring occupies when at rest.
    pub fn resting_offset(&self, mode: DisplayMode) -> Offset {
        match mode {
            DisplayMode::Hour => self.hour_offset,
            DisplayMode::Minute => self.minute_offset,
        }
    }

    /// Where an incoming ring starts: the other mode's slot.
    pub fn entry_offset(&self, mode: DisplayMode) -> Offset {
        self.resting_offset(mode.other())
    }

    /// Where an outgoing ring heads: its own slot.
    pub fn exit_offset(&self, mode: DisplayMode) -> Offset {
        self.resting_offset(mode)
    }

    pub fn resting_props(&self, mode: DisplayMode) -> AnimatedProps {
        AnimatedProps::new(1.0, self.resting_offset(mode), self.inner_rest)
    }

    pub fn entry_props(&self, mode: DisplayMode) -> AnimatedProps {
        AnimatedProps::new(0.0, self.entry_offset(mode), self.inner_offstage)
    }

    pub fn exit_props(&self, mode: DisplayMode) -> AnimatedProps {
        AnimatedProps::new(0.0, self.exit_offset(mode), self.inner_offstage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [DisplayMode; 2] = [DisplayMode::Hour, DisplayMode::Minute];

    #[test]
    fn test_entry_uses_other_slot_exit_uses_own() {
        let policy = PositionPolicy::default();
        for mode in MODES {
            assert_eq!(policy.entry_offset(mode), policy.resting_offset(mode.other()));
            assert_eq!(policy.exit_offset(mode), policy.resting_offset(mode));
        }
    }

    #[test]
    fn test_slots_come_from_layout() {
        let layout = LayoutConfig {
            hour_offset: 5.0,
            minute_offset: -7.0,
            ..LayoutConfig::default()
        };
        let policy = PositionPolicy::from(&layout);
        assert_eq!(policy.entry_offset(DisplayMode::Hour), -7.0);
        assert_eq!(policy.entry_offset(DisplayMode::Minute), 5.0);
    }

    #[test]
    fn test_props_targets() {
        let policy = PositionPolicy::default();
        let rest = policy.resting_props(DisplayMode::Minute);
        assert_eq!(rest.opacity, 1.0);
        assert_eq!(rest.outer_translate, policy.minute_offset);
        assert_eq!(rest.inner_translate, policy.inner_rest);

        let entry = policy.entry_props(DisplayMode::Minute);
        assert_eq!(entry.opacity, 0.0);
        assert_eq!(entry.outer_translate, policy.hour_offset);
        assert_eq!(entry.inner_translate, policy.inner_offstage);

        let exit = policy.exit_props(DisplayMode::Hour);
        assert_eq!(exit.opacity, 0.0);
        assert_eq!(exit.outer_translate, policy.hour_offset);
    }
}
