//! paint-core: retained display list and painter for the clock face.
//!
//! Drawing code records commands through a [`Painter`]; the resulting
//! [`DisplayList`] is what a rasterizer (or a test) consumes. Hit testing
//! runs over the same list so interaction always matches what was painted.

mod color;
pub mod display_list;
pub mod painter;
pub mod scene;

pub use display_list::{Command, DisplayList, Viewport};
pub use hit_test::{HitIndex, HitKind, HitResult, hit_test};
pub use painter::Painter;
pub use scene::*;
