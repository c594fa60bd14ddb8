//! Interpolation for animatable values.

use super::types::AnimatedProps;

/// Trait for types that can be interpolated between two values.
///
/// When t = 0.0, returns self; when t = 1.0, returns `to`. Values outside
/// [0, 1] extrapolate, which spring motion relies on for overshoot.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

/// Linear interpolation helper for f32 values.
#[inline]
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

impl Interpolate for AnimatedProps {
    /// Component-wise. Opacity is clamped to [0, 1] so overshoot never
    /// produces an invalid alpha; translations may overshoot freely.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            opacity: lerp_f32(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            outer_translate: lerp_f32(self.outer_translate, to.outer_translate, t),
            inner_translate: lerp_f32(self.inner_translate, to.inner_translate, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_interpolate() {
        assert_eq!(0.0f32.interpolate(&10.0, 0.0), 0.0);
        assert_eq!(0.0f32.interpolate(&10.0, 0.5), 5.0);
        assert_eq!(0.0f32.interpolate(&10.0, 1.0), 10.0);
    }

    #[test]
    fn test_props_interpolate() {
        let from = AnimatedProps::new(0.0, 18.0, 18.0);
        let to = AnimatedProps::new(1.0, 30.0, 0.0);
        let mid = from.interpolate(&to, 0.5);
        assert_eq!(mid, AnimatedProps::new(0.5, 24.0, 9.0));
    }

    #[test]
    fn test_props_overshoot_clamps_opacity_only() {
        let from = AnimatedProps::new(0.0, 0.0, 0.0);
        let to = AnimatedProps::new(1.0, 10.0, 0.0);
        let over = from.interpolate(&to, 1.2);
        assert_eq!(over.opacity, 1.0);
        assert!((over.outer_translate - 12.0).abs() < 1e-5);
    }
}
