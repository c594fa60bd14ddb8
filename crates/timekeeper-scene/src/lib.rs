//! timekeeper-scene: the clock face and its numeral ring transitions.
//!
//! - [`animation`]: props interpolation, easing, springs and tweens
//! - [`clock`]: display modes, ring positions, the transition engine and the
//!   clock state store
//! - [`surface`]: paints engine frames and the hand into a
//!   [`paint_core::DisplayList`]
//!
//! A host drives one frame like this:
//!
//! ```
//! use timekeeper_scene::animation::Instant;
//! use timekeeper_scene::clock::{DisplayMode, TimekeeperStore, TransitionEngine};
//! use timekeeper_scene::surface::ClockSurface;
//!
//! let mut store = TimekeeperStore::default();
//! let surface = ClockSurface::default();
//! let mut engine = TransitionEngine::new(Instant, surface.policy);
//!
//! engine.observe(store.mode());
//! let first = surface.render(&engine, &store.state());
//! engine.initialize();
//! assert!(!first.is_empty());
//!
//! store.set_mode(DisplayMode::Minute);
//! engine.observe(store.mode());
//! engine.tick(16.0);
//! let list = surface.render(&engine, &store.state());
//! assert_eq!(list.text_runs().count(), 12);
//! ```

pub mod animation;
pub mod clock;
pub mod error;
pub mod surface;

pub use error::{Result, SceneError};
