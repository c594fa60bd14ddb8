//! Clock face rendering: dial geometry, numeral rings and the hand.

pub mod clock_surface;
pub mod geometry;
pub mod hand;
pub mod numerals;

pub use clock_surface::{ClockSurface, DialStyle};
pub use geometry::DialGeometry;
pub use hand::HAND_REGION_ID;
pub use numerals::{HourNumerals, MinuteNumerals, NumeralRenderer};
