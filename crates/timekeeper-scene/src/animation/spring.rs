//! Damped spring motion.
//!
//! The spring is evaluated in closed form from rest at 0 toward a target of
//! 1, so progress is a pure function of elapsed time and any number of
//! tweens can share one configuration. Underdamped springs overshoot the
//! target before settling.

use timekeeper_config::SpringSettings;

use super::interpolator::Interpolator;

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Distance from the target below which the spring counts as settled.
    pub precision: f32,
}

impl SpringConfig {
    /// Near-critically damped, no visible overshoot.
    pub const DEFAULT: Self = Self {
        tension: 170.0,
        friction: 26.0,
        mass: 1.0,
        precision: 0.005,
    };
    pub const GENTLE: Self = Self {
        tension: 120.0,
        friction: 14.0,
        mass: 1.0,
        precision: 0.005,
    };
    pub const WOBBLY: Self = Self {
        tension: 180.0,
        friction: 12.0,
        mass: 1.0,
        precision: 0.005,
    };
    pub const STIFF: Self = Self {
        tension: 210.0,
        friction: 20.0,
        mass: 1.0,
        precision: 0.005,
    };

    /// Undamped angular frequency (rad/s).
    fn omega0(&self) -> f32 {
        (self.tension / self.mass.max(1e-3)).sqrt()
    }

    /// Damping ratio; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        self.friction / (2.0 * (self.tension * self.mass.max(1e-3)).sqrt())
    }

    fn is_degenerate(&self) -> bool {
        self.tension <= 0.0 || self.friction < 0.0
    }

    /// Position of the spring after `t` seconds, released from 0 toward 1.
    fn position(&self, t: f32) -> f32 {
        let w0 = self.omega0();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-3 {
            return 1.0 - (-w0 * t).exp() * (1.0 + w0 * t);
        }

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let s = w0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * w0 + s;
            let r2 = -zeta * w0 - s;
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Upper bound on the distance from the target after `t` seconds.
    fn amplitude(&self, t: f32) -> f32 {
        let w0 = self.omega0();
        let zeta = self.damping_ratio();

        if zeta < 1.0 && (zeta - 1.0).abs() >= 1e-3 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let k = zeta * w0 / wd;
            (-zeta * w0 * t).exp() * (1.0 + k * k).sqrt()
        } else {
            // Critically and overdamped springs approach monotonically.
            (1.0 - self.position(t)).abs()
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&SpringSettings> for SpringConfig {
    fn from(settings: &SpringSettings) -> Self {
        Self {
            tension: settings.tension,
            friction: settings.friction,
            mass: settings.mass,
            precision: settings.precision,
        }
    }
}

impl Interpolator for SpringConfig {
    fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.is_degenerate() || self.is_settled(elapsed_ms) {
            return 1.0;
        }
        self.position(elapsed_ms.max(0.0) / 1000.0)
    }

    fn is_settled(&self, elapsed_ms: f32) -> bool {
        if self.is_degenerate() {
            return true;
        }
        let precision = self.precision.max(1e-4);
        elapsed_ms > 0.0 && self.amplitude(elapsed_ms / 1000.0) < precision
    }
}
