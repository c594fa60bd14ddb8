//! Dial geometry.
//!
//! Angles are measured clockwise from 12 o'clock in radians, in the y-down
//! coordinate system of the display list. Points are either world space
//! (display list / pointer coordinates) or local space (relative to the dial
//! center); the surface paints numerals and the hand in local space.

use std::f32::consts::TAU;

use timekeeper_config::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    /// Dial center in world space.
    pub center: [f32; 2],
    /// Outer dial radius.
    pub radius: f32,
    /// Radius of the 24-hour inner ring at rest displacement zero.
    pub inner_radius: f32,
    pub numeral_size: f32,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self::from_layout(&LayoutConfig::default())
    }
}

impl DialGeometry {
    /// Dial centered in a square viewport just large enough to hold it.
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self {
            center: [layout.radius, layout.radius],
            radius: layout.radius,
            inner_radius: layout.inner_radius,
            numeral_size: layout.numeral_size,
        }
    }

    /// Side of the square viewport that contains the dial.
    pub fn extent(&self) -> u32 {
        (self.radius * 2.0).ceil().max(0.0) as u32
    }

    /// Local point at `angle` and distance `r` from the center.
    pub fn polar(angle: f32, r: f32) -> [f32; 2] {
        let (s, c) = angle.sin_cos();
        [r * s, -r * c]
    }

    pub fn to_local(&self, world: [f32; 2]) -> [f32; 2] {
        [world[0] - self.center[0], world[1] - self.center[1]]
    }

    pub fn to_world(&self, local: [f32; 2]) -> [f32; 2] {
        [local[0] + self.center[0], local[1] + self.center[1]]
    }

    /// Clockwise angle of a local point from 12 o'clock, in `[0, TAU)`.
    pub fn angle_of(local: [f32; 2]) -> f32 {
        let angle = local[0].atan2(-local[1]);
        if angle < 0.0 { angle + TAU } else { angle }
    }

    pub fn distance(local: [f32; 2]) -> f32 {
        local[0].hypot(local[1])
    }
}

/// Index of the nearest of `steps` evenly spaced positions around the dial.
pub fn nearest_step(angle: f32, steps: u32) -> u32 {
    let step = TAU / steps as f32;
    ((angle / step).round() as u32) % steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-4 && (a[1] - b[1]).abs() < 1e-4
    }

    #[test]
    fn test_polar_is_clockwise_from_top() {
        assert!(close(DialGeometry::polar(0.0, 10.0), [0.0, -10.0]));
        assert!(close(DialGeometry::polar(FRAC_PI_2, 10.0), [10.0, 0.0]));
        assert!(close(DialGeometry::polar(PI, 10.0), [0.0, 10.0]));
    }

    #[test]
    fn test_angle_of_inverts_polar() {
        for i in 0..12 {
            let angle = i as f32 * TAU / 12.0;
            let p = DialGeometry::polar(angle, 50.0);
            assert!((DialGeometry::angle_of(p) - angle).abs() < 1e-4, "step {i}");
            assert!((DialGeometry::distance(p) - 50.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_world_local_roundtrip_and_extent() {
        let dial = DialGeometry::default();
        assert_eq!(dial.extent(), 220);
        assert_eq!(dial.to_local(dial.center), [0.0, 0.0]);
        assert_eq!(dial.to_world(dial.to_local([3.0, 4.0])), [3.0, 4.0]);
    }

    #[test]
    fn test_nearest_step_wraps() {
        assert_eq!(nearest_step(0.0, 12), 0);
        assert_eq!(nearest_step(TAU - 0.01, 12), 0);
        assert_eq!(nearest_step(FRAC_PI_2, 12), 3);
        assert_eq!(nearest_step(FRAC_PI_2, 60), 15);
    }
}
