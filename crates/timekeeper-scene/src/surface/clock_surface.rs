//! Render surface for the clock face.
//!
//! Paint order, bottom to top:
//!
//! 1. dial face
//! 2. numeral rings, one opacity group per live instance (leaving rings first)
//! 3. hand line, knob and center pin
//! 4. hit region over the knob
//!
//! The surface only reads engine frames; it never drives the engine.

use paint_core::{Brush, Color, DisplayList, Painter, Path, Stroke, Transform2D, Viewport};
use tracing::trace;

use timekeeper_config::TimekeeperConfig;

use super::geometry::DialGeometry;
use super::hand::{HAND_REGION_ID, tip_position};
use super::numerals::{HourNumerals, MinuteNumerals, NumeralRenderer};
use crate::animation::interpolator::Interpolator;
use crate::clock::engine::{InstanceFrame, TransitionEngine};
use crate::clock::mode::DisplayMode;
use crate::clock::position::PositionPolicy;
use crate::clock::state::ClockState;

pub const FACE_Z: i32 = 0;
pub const NUMERAL_Z: i32 = 10;
pub const HAND_Z: i32 = 20;
pub const HAND_REGION_Z: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialStyle {
    pub face: Color,
    pub numeral: Color,
    pub hand: Color,
    pub hand_width: f32,
    pub knob_radius: f32,
    pub pin_radius: f32,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            face: Color::rgba(236, 239, 241, 255),
            numeral: Color::rgba(33, 33, 33, 255),
            hand: Color::rgba(63, 81, 181, 255),
            hand_width: 2.0,
            knob_radius: 16.0,
            pin_radius: 3.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClockSurface {
    pub dial: DialGeometry,
    pub policy: PositionPolicy,
    pub style: DialStyle,
    pub hour24_mode: bool,
}

impl ClockSurface {
    pub fn from_config(config: &TimekeeperConfig) -> Self {
        Self {
            dial: DialGeometry::from_layout(&config.layout),
            policy: PositionPolicy::from(&config.layout),
            style: DialStyle::default(),
            hour24_mode: config.clock.hour24_mode,
        }
    }

    pub fn viewport(&self) -> Viewport {
        let side = self.dial.extent();
        Viewport {
            width: side,
            height: side,
        }
    }

    fn renderer(&self, mode: DisplayMode) -> Box<dyn NumeralRenderer> {
        match mode {
            DisplayMode::Hour => Box::new(HourNumerals {
                hour24_mode: self.hour24_mode,
            }),
            DisplayMode::Minute => Box::new(MinuteNumerals),
        }
    }

    /// Record one frame of the clock face.
    pub fn paint(&self, painter: &mut Painter, frames: &[InstanceFrame], state: &ClockState) {
        let brush = Brush::Solid(self.style.face);
        painter.circle(self.dial.center, self.dial.radius, brush, FACE_Z);

        painter.push_transform(Transform2D::translate(self.dial.center[0], self.dial.center[1]));

        for frame in frames {
            trace!(id = %frame.id, mode = %frame.mode, opacity = frame.props.opacity, "numeral ring");
            painter.push_opacity(frame.props.opacity);
            self.renderer(frame.mode).paint(
                painter,
                &self.dial,
                &frame.props,
                self.style.numeral,
                NUMERAL_Z,
            );
            painter.pop_opacity();
        }

        if let Some(mode) = state.mode {
            self.paint_hand(painter, mode, state);
        }

        painter.pop_transform();
    }

    fn paint_hand(&self, painter: &mut Painter, mode: DisplayMode, state: &ClockState) {
        let tip = tip_position(state.time, mode, self.hour24_mode, &self.dial, &self.policy);
        let style = &self.style;

        painter.stroke_path(
            Path::line([0.0, 0.0], tip),
            Stroke {
                width: style.hand_width,
            },
            style.hand,
            HAND_Z,
        );
        painter.circle(tip, style.knob_radius, Brush::Solid(style.hand), HAND_Z);
        painter.circle([0.0, 0.0], style.pin_radius, Brush::Solid(style.hand), HAND_Z);
        painter.hit_region_circle(HAND_REGION_ID, tip, style.knob_radius, HAND_REGION_Z);
    }

    /// Paint the engine's current frames into a fresh display list.
    pub fn render<I: Interpolator>(&self, engine: &TransitionEngine<I>, state: &ClockState) -> DisplayList {
        let mut painter = Painter::begin_frame(self.viewport());
        self.paint(&mut painter, &engine.frames(), state);
        painter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::interpolator::Instant;
    use crate::animation::types::{AnimatedProps, InstanceId, Phase};
    use crate::clock::state::ClockTime;
    use paint_core::{Command, HitKind, hit_test};

    fn frame(mode: DisplayMode, props: AnimatedProps) -> InstanceFrame {
        InstanceFrame {
            id: InstanceId::new(),
            mode,
            phase: Phase::Active,
            props,
        }
    }

    fn state(mode: Option<DisplayMode>, hour: u8, minute: u8) -> ClockState {
        ClockState {
            mode,
            time: ClockTime::new(hour, minute).unwrap(),
        }
    }

    fn paint(surface: &ClockSurface, frames: &[InstanceFrame], state: &ClockState) -> DisplayList {
        let mut p = Painter::begin_frame(surface.viewport());
        surface.paint(&mut p, frames, state);
        p.finish()
    }

    #[test]
    fn test_hand_region_wins_over_numeral() {
        let surface = ClockSurface::default();
        let rest = surface.policy.resting_props(DisplayMode::Hour);
        let list = paint(&surface, &[frame(DisplayMode::Hour, rest)], &state(Some(DisplayMode::Hour), 3, 0));

        // The knob sits exactly on the "3" label.
        let three = surface.dial.to_world([92.0, 0.0]);
        let hit = hit_test(&list, three).unwrap();
        assert_eq!(hit.kind, HitKind::HitRegion);
        assert_eq!(hit.region_id, Some(HAND_REGION_ID));

        // Elsewhere numerals are still hittable.
        let six = surface.dial.to_world([0.0, 92.0]);
        let hit = hit_test(&list, six).unwrap();
        assert_eq!(hit.kind, HitKind::Text);
        assert_eq!(hit.text.as_deref(), Some("6"));
    }

    #[test]
    fn test_frames_paint_in_opacity_groups() {
        let surface = ClockSurface::default();
        let frames = [
            frame(DisplayMode::Hour, AnimatedProps::new(0.25, 24.0, 18.0)),
            frame(DisplayMode::Minute, AnimatedProps::new(0.75, 24.0, 18.0)),
        ];
        let list = paint(&surface, &frames, &state(Some(DisplayMode::Minute), 3, 0));

        let runs: Vec<_> = list.text_runs().collect();
        assert_eq!(runs.len(), 24);
        assert!(runs[..12].iter().all(|(_, o)| (*o - 0.25).abs() < 1e-6));
        assert!(runs[12..].iter().all(|(_, o)| (*o - 0.75).abs() < 1e-6));
        assert_eq!(runs[12].0.text, "00");
        // Outer ring pulled in by the animated offset.
        assert!((runs[12].0.pos[1] + 86.0).abs() < 1e-4);
    }

    #[test]
    fn test_null_mode_skips_hand() {
        let surface = ClockSurface::default();
        let rest = surface.policy.resting_props(DisplayMode::Minute);
        let list = paint(&surface, &[frame(DisplayMode::Minute, rest)], &state(None, 3, 0));

        assert!(!list.commands.iter().any(|c| matches!(
            c,
            Command::StrokePath { .. } | Command::HitRegionEllipse { .. }
        )));
        assert_eq!(list.text_runs().count(), 12);
    }

    #[test]
    fn test_hand_above_numerals() {
        let surface = ClockSurface {
            hour24_mode: true,
            ..ClockSurface::default()
        };
        let rest = surface.policy.resting_props(DisplayMode::Hour);
        let list = paint(&surface, &[frame(DisplayMode::Hour, rest)], &state(Some(DisplayMode::Hour), 15, 0));
        assert_eq!(list.text_runs().count(), 24);

        let max_text_z = list
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::DrawText { z, .. } => Some(*z),
                _ => None,
            })
            .max()
            .unwrap();
        let hand_z = list
            .commands
            .iter()
            .find_map(|c| match c {
                Command::StrokePath { z, .. } => Some(*z),
                _ => None,
            })
            .unwrap();
        assert!(hand_z > max_text_z);

        // 15:00 in 24-hour mode points at the inner "15".
        let inner_fifteen = surface.dial.to_world([60.0, 0.0]);
        let hit = hit_test(&list, inner_fifteen).unwrap();
        assert_eq!(hit.region_id, Some(HAND_REGION_ID));
    }

    #[test]
    fn test_render_from_engine() {
        let surface = ClockSurface::default();
        let mut engine = TransitionEngine::new(Instant, surface.policy);
        let clock = state(Some(DisplayMode::Hour), 9, 41);
        engine.observe(clock.mode);

        let list = surface.render(&engine, &clock);
        assert_eq!(list.viewport, surface.viewport());
        let labels: Vec<_> = list.text_runs().map(|(run, _)| run.text.as_str()).collect();
        assert_eq!(labels.first(), Some(&"12"));
        assert!(list.text_runs().all(|(_, opacity)| opacity == 1.0));
    }
}
