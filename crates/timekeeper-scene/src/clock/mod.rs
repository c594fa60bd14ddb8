//! Display modes, ring positions and the transition engine.

pub mod engine;
pub mod first_render;
pub mod mode;
pub mod position;
pub mod state;

pub use engine::{InstanceFrame, Reconciliation, TransitionEngine, TransitionInstance};
pub use first_render::FirstRender;
pub use mode::DisplayMode;
pub use position::PositionPolicy;
pub use state::{ClockState, ClockTime, TimekeeperStore};
