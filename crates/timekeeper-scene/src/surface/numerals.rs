//! Numeral rings for the hour and minute modes.

use std::f32::consts::TAU;

use paint_core::{Color, Painter, TextRun};

use super::geometry::DialGeometry;
use crate::animation::types::AnimatedProps;
use crate::clock::mode::DisplayMode;

/// Outer hour labels, starting at 12 o'clock.
pub const HOUR_LABELS: [&str; 12] = ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];
/// Inner ring labels shown in 24-hour mode.
pub const HOUR24_LABELS: [&str; 12] = [
    "00", "13", "14", "15", "16", "17", "18", "19", "20", "21", "22", "23",
];
pub const MINUTE_LABELS: [&str; 12] = [
    "00", "05", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55",
];

/// Paints one numeral set in dial-local coordinates.
pub trait NumeralRenderer {
    fn mode(&self) -> DisplayMode;

    fn paint(
        &self,
        painter: &mut Painter,
        dial: &DialGeometry,
        props: &AnimatedProps,
        color: Color,
        z: i32,
    );
}

fn paint_ring(painter: &mut Painter, labels: &[&str; 12], radius: f32, size: f32, color: Color, z: i32) {
    for (i, label) in labels.iter().enumerate() {
        let angle = i as f32 * TAU / 12.0;
        painter.text(
            TextRun {
                text: (*label).to_string(),
                pos: DialGeometry::polar(angle, radius),
                size,
                color,
            },
            z,
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HourNumerals {
    pub hour24_mode: bool,
}

impl NumeralRenderer for HourNumerals {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Hour
    }

    fn paint(
        &self,
        painter: &mut Painter,
        dial: &DialGeometry,
        props: &AnimatedProps,
        color: Color,
        z: i32,
    ) {
        let outer = dial.radius - props.outer_translate;
        paint_ring(painter, &HOUR_LABELS, outer, dial.numeral_size, color, z);

        if self.hour24_mode {
            let inner = dial.inner_radius - props.inner_translate;
            // Inner ring uses a smaller face.
            paint_ring(painter, &HOUR24_LABELS, inner, dial.numeral_size * 0.85, color, z);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteNumerals;

impl NumeralRenderer for MinuteNumerals {
    fn mode(&self) -> DisplayMode {
        DisplayMode::Minute
    }

    fn paint(
        &self,
        painter: &mut Painter,
        dial: &DialGeometry,
        props: &AnimatedProps,
        color: Color,
        z: i32,
    ) {
        let outer = dial.radius - props.outer_translate;
        paint_ring(painter, &MINUTE_LABELS, outer, dial.numeral_size, color, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_core::Viewport;

    fn labels(list: &paint_core::DisplayList) -> Vec<String> {
        list.text_runs().map(|(run, _)| run.text.clone()).collect()
    }

    #[test]
    fn test_hour_ring_12h() {
        let mut p = Painter::begin_frame(Viewport::default());
        let props = AnimatedProps::new(1.0, 18.0, 0.0);
        HourNumerals { hour24_mode: false }.paint(&mut p, &DialGeometry::default(), &props, Color::default(), 0);
        let list = p.finish();
        assert_eq!(labels(&list), HOUR_LABELS.map(String::from).to_vec());

        // "12" sits straight up at radius - offset.
        let (twelve, _) = list.text_runs().next().unwrap();
        assert!((twelve.pos[1] + 92.0).abs() < 1e-4);
    }

    #[test]
    fn test_hour_ring_24h_adds_inner_ring() {
        let mut p = Painter::begin_frame(Viewport::default());
        let props = AnimatedProps::new(1.0, 18.0, 18.0);
        HourNumerals { hour24_mode: true }.paint(&mut p, &DialGeometry::default(), &props, Color::default(), 0);
        let list = p.finish();
        assert_eq!(list.text_runs().count(), 24);

        let (zero, _) = list.text_runs().find(|(run, _)| run.text == "00").unwrap();
        assert!((zero.pos[1] + 42.0).abs() < 1e-4);
    }

    #[test]
    fn test_minute_ring() {
        let mut p = Painter::begin_frame(Viewport::default());
        let props = AnimatedProps::new(1.0, 30.0, 0.0);
        MinuteNumerals.paint(&mut p, &DialGeometry::default(), &props, Color::default(), 0);
        let list = p.finish();
        assert_eq!(labels(&list), MINUTE_LABELS.map(String::from).to_vec());
        let (fifteen, _) = list.text_runs().nth(3).unwrap();
        assert!((fifteen.pos[0] - 80.0).abs() < 1e-3);
        assert_eq!(MinuteNumerals.mode(), DisplayMode::Minute);
    }
}
