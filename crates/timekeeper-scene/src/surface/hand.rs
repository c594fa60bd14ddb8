//! Clock hand placement and pointer-to-time conversion.
//!
//! The hand is driven directly by the store's time and mode; it does not
//! animate.

use std::f32::consts::TAU;

use super::geometry::{DialGeometry, nearest_step};
use crate::clock::mode::DisplayMode;
use crate::clock::position::PositionPolicy;
use crate::clock::state::ClockTime;

/// Hit region id of the hand knob.
pub const HAND_REGION_ID: u32 = 1;

/// Hours that sit on the inner ring in 24-hour mode.
pub fn is_inner_hour(hour: u8) -> bool {
    hour == 0 || hour >= 13
}

/// Angle of the hand for `time` in `mode`.
pub fn hand_angle(time: ClockTime, mode: DisplayMode) -> f32 {
    match mode {
        DisplayMode::Hour => (time.hour % 12) as f32 * TAU / 12.0,
        DisplayMode::Minute => time.minute as f32 * TAU / 60.0,
    }
}

/// Distance from the center to the hand tip: the resting slot of the ring
/// the selected value is printed on.
pub fn tip_radius(
    time: ClockTime,
    mode: DisplayMode,
    hour24_mode: bool,
    dial: &DialGeometry,
    policy: &PositionPolicy,
) -> f32 {
    if mode.is_hour() && hour24_mode && is_inner_hour(time.hour) {
        dial.inner_radius - policy.inner_rest
    } else {
        dial.radius - policy.resting_offset(mode)
    }
}

/// Local position of the hand tip.
pub fn tip_position(
    time: ClockTime,
    mode: DisplayMode,
    hour24_mode: bool,
    dial: &DialGeometry,
    policy: &PositionPolicy,
) -> [f32; 2] {
    DialGeometry::polar(
        hand_angle(time, mode),
        tip_radius(time, mode, hour24_mode, dial, policy),
    )
}

/// Time selected by a pointer at `local` while `mode` is displayed.
///
/// Minutes snap to the nearest minute. Hours snap to the nearest hour step;
/// in 24-hour mode the ring closest to the pointer decides between `1..=12`
/// and `13..=23, 0`, otherwise the current AM/PM half is kept.
pub fn time_at_point(
    local: [f32; 2],
    mode: DisplayMode,
    current: ClockTime,
    hour24_mode: bool,
    dial: &DialGeometry,
    policy: &PositionPolicy,
) -> ClockTime {
    let angle = DialGeometry::angle_of(local);
    match mode {
        DisplayMode::Minute => current.with_minute(nearest_step(angle, 60) as u8),
        DisplayMode::Hour => {
            let step = nearest_step(angle, 12) as u8;
            let hour = if hour24_mode {
                let inner = dial.inner_radius - policy.inner_rest;
                let outer = dial.radius - policy.hour_offset;
                if DialGeometry::distance(local) < (inner + outer) * 0.5 {
                    if step == 0 { 0 } else { step + 12 }
                } else if step == 0 {
                    12
                } else {
                    step
                }
            } else if current.is_pm() {
                step + 12
            } else {
                step
            };
            current.with_hour(hour)
        }
    }
}
