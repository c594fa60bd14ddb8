//! Error types for the clock scene.

use thiserror::Error;

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors that can occur while building clock state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Hour or minute outside of `0..=23` / `0..=59`.
    #[error("invalid clock time {hour}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },
}
