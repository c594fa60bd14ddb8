//! Clock state and the store that owns it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use timekeeper_config::TimekeeperConfig;

use super::mode::DisplayMode;
use super::position::PositionPolicy;
use crate::error::{Result, SceneError};
use crate::surface::geometry::DialGeometry;
use crate::surface::hand::time_at_point;

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl Default for ClockTime {
    fn default() -> Self {
        Self { hour: 12, minute: 0 }
    }
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SceneError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour on a 12-hour face, `1..=12`.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    pub(crate) fn with_hour(self, hour: u8) -> Self {
        Self {
            hour: hour % 24,
            ..self
        }
    }

    pub(crate) fn with_minute(self, minute: u8) -> Self {
        Self {
            minute: minute % 60,
            ..self
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// What the clock face is asked to show. `mode` is `None` while the host
/// is between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockState {
    pub mode: Option<DisplayMode>,
    pub time: ClockTime,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            mode: Some(DisplayMode::Hour),
            time: ClockTime::default(),
        }
    }
}

/// Owner of the clock state.
///
/// Every mutator returns whether the state actually changed; real changes
/// bump [`revision`](Self::revision) so a host can skip unchanged frames.
#[derive(Debug, Clone, Default)]
pub struct TimekeeperStore {
    state: ClockState,
    revision: u64,
    hour24_mode: bool,
}

impl TimekeeperStore {
    pub fn new(state: ClockState, hour24_mode: bool) -> Self {
        Self {
            state,
            revision: 0,
            hour24_mode,
        }
    }

    pub fn from_config(config: &TimekeeperConfig) -> Self {
        Self::new(ClockState::default(), config.clock.hour24_mode)
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.state.mode
    }

    pub fn time(&self) -> ClockTime {
        self.state.time
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn hour24_mode(&self) -> bool {
        self.hour24_mode
    }

    fn update(&mut self, next: ClockState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        self.revision += 1;
        debug!(revision = self.revision, mode = ?next.mode, time = %next.time, "clock state changed");
        true
    }

    pub fn set_mode(&mut self, mode: DisplayMode) -> bool {
        self.update(ClockState {
            mode: Some(mode),
            ..self.state
        })
    }

    /// Enter the transient state with no mode selected.
    pub fn clear_mode(&mut self) -> bool {
        self.update(ClockState {
            mode: None,
            ..self.state
        })
    }

    pub fn set_time(&mut self, time: ClockTime) -> bool {
        self.update(ClockState { time, ..self.state })
    }

    /// Move the hand to a world-space pointer position.
    ///
    /// Returns the selected time, or `None` when no mode is displayed.
    pub fn drag_to(
        &mut self,
        point: [f32; 2],
        dial: &DialGeometry,
        policy: &PositionPolicy,
    ) -> Option<ClockTime> {
        let mode = self.state.mode?;
        let time = time_at_point(
            dial.to_local(point),
            mode,
            self.state.time,
            self.hour24_mode,
            dial,
            policy,
        );
        self.set_time(time);
        Some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_validation() {
        assert!(ClockTime::new(23, 59).is_ok());
        assert_eq!(
            ClockTime::new(24, 0),
            Err(SceneError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(ClockTime::new(7, 60).is_err());
    }

    #[test]
    fn test_clock_time_helpers() {
        let midnight = ClockTime::new(0, 5).unwrap();
        assert_eq!(midnight.hour12(), 12);
        assert!(!midnight.is_pm());
        assert_eq!(midnight.to_string(), "00:05");

        let evening = ClockTime::new(19, 30).unwrap();
        assert_eq!(evening.hour12(), 7);
        assert!(evening.is_pm());
    }

    #[test]
    fn test_revision_only_bumps_on_change() {
        let mut store = TimekeeperStore::default();
        assert_eq!(store.mode(), Some(DisplayMode::Hour));

        assert!(!store.set_mode(DisplayMode::Hour));
        assert_eq!(store.revision(), 0);

        assert!(store.set_mode(DisplayMode::Minute));
        assert!(store.clear_mode());
        assert!(!store.clear_mode());
        assert_eq!(store.mode(), None);
        assert_eq!(store.revision(), 2);

        assert!(store.set_time(ClockTime::new(8, 15).unwrap()));
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_drag_to_updates_time() {
        let dial = DialGeometry::default();
        let policy = PositionPolicy::default();
        let mut store = TimekeeperStore::new(
            ClockState {
                mode: Some(DisplayMode::Minute),
                time: ClockTime::new(10, 0).unwrap(),
            },
            false,
        );

        // Pointer straight below the center, on the minute ring.
        let point = dial.to_world([0.0, 80.0]);
        assert_eq!(store.drag_to(point, &dial, &policy), Some(ClockTime::new(10, 30).unwrap()));
        assert_eq!(store.time().minute, 30);

        store.clear_mode();
        let revision = store.revision();
        assert_eq!(store.drag_to(point, &dial, &policy), None);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_from_config() {
        let mut config = TimekeeperConfig::default();
        config.clock.hour24_mode = true;
        let store = TimekeeperStore::from_config(&config);
        assert!(store.hour24_mode());
        assert_eq!(store.state(), ClockState::default());
    }
}
