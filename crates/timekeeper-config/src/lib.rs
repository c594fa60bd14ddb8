//! Timekeeper configuration system
//!
//! Settings are loaded from `timekeeper.toml` and can be overridden by
//! environment variables. Every section falls back to defaults field by field,
//! so a partial file is always valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "timekeeper.toml";

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A textual setting named an unknown variant.
    #[error("unknown {setting} value `{value}`")]
    UnknownValue { setting: &'static str, value: String },
}

/// Main configuration structure for the clock face
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TimekeeperConfig {
    /// Clock labeling settings
    pub clock: ClockConfig,
    /// Numeral ring transition settings
    pub animation: AnimationConfig,
    /// Dial geometry and ring offsets
    pub layout: LayoutConfig,
    /// Mount/remount behavior
    pub lifecycle: LifecycleConfig,
}

/// Clock labeling configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Label hours 00-23 (inner ring for 13-23) instead of 1-12
    pub hour24_mode: bool,
}

/// Which interpolation drives the numeral transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Fixed duration with an easing curve.
    Timed,
    /// Damped spring, settles within a precision threshold.
    #[default]
    Spring,
    /// Jump straight to the target (reduced motion).
    Instant,
}

impl FromStr for MotionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timed" => Ok(Self::Timed),
            "spring" => Ok(Self::Spring),
            "instant" | "none" => Ok(Self::Instant),
            _ => Err(ConfigError::UnknownValue {
                setting: "motion",
                value: s.to_string(),
            }),
        }
    }
}

/// Named easing curves available to the timed motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingName {
    Linear,
    Ease,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

/// Spring physics parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpringSettings {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Distance from the target below which the spring counts as settled
    pub precision: f32,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            tension: 170.0,
            friction: 26.0,
            mass: 1.0,
            precision: 0.005,
        }
    }
}

/// Transition configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub motion: MotionKind,
    /// Duration for the timed motion in milliseconds
    pub duration_ms: f32,
    pub easing: EasingName,
    pub spring: SpringSettings,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            motion: MotionKind::default(),
            duration_ms: 300.0,
            easing: EasingName::default(),
            spring: SpringSettings::default(),
        }
    }
}

/// Dial geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Outer dial radius in pixels
    pub radius: f32,
    /// Radius of the 24-hour inner numeral ring
    pub inner_radius: f32,
    /// Resting inset of the hour ring from the dial edge
    pub hour_offset: f32,
    /// Resting inset of the minute ring from the dial edge
    pub minute_offset: f32,
    /// Inner ring displacement at rest
    pub inner_rest: f32,
    /// Inner ring displacement while entering or leaving
    pub inner_offstage: f32,
    /// Numeral font size
    pub numeral_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 110.0,
            inner_radius: 60.0,
            hour_offset: 18.0,
            minute_offset: 30.0,
            inner_rest: 0.0,
            inner_offstage: 18.0,
            numeral_size: 16.0,
        }
    }
}

/// What a remount does with the first-render entry skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemountPolicy {
    /// A remount is a fresh mount: the ring appears at rest again.
    #[default]
    ReplaySkip,
    /// Only the very first mount skips; a remounted ring animates in.
    Animate,
}

impl FromStr for RemountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "replay_skip" => Ok(Self::ReplaySkip),
            "animate" => Ok(Self::Animate),
            _ => Err(ConfigError::UnknownValue {
                setting: "remount",
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LifecycleConfig {
    pub remount: RemountPolicy,
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl TimekeeperConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (timekeeper.toml in the current directory)
    /// or return default configuration if the file doesn't exist or is invalid
    pub fn load_or_default() -> Self {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(path).unwrap_or_else(|err| {
            warn!("{err}; using default configuration");
            Self::default()
        })
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unrecognised values are logged and ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("TIMEKEEPER_HOUR24") {
            self.clock.hour24_mode = env_flag(&val);
        }
        if let Ok(val) = std::env::var("TIMEKEEPER_MOTION") {
            match val.parse() {
                Ok(motion) => self.animation.motion = motion,
                Err(err) => warn!("TIMEKEEPER_MOTION: {err}"),
            }
        }
        if let Ok(val) = std::env::var("TIMEKEEPER_DURATION_MS") {
            match val.parse::<f32>() {
                Ok(ms) if ms >= 0.0 => self.animation.duration_ms = ms,
                _ => warn!("TIMEKEEPER_DURATION_MS: ignoring `{val}`"),
            }
        }
        if let Ok(val) = std::env::var("TIMEKEEPER_REMOUNT") {
            match val.parse() {
                Ok(policy) => self.lifecycle.remount = policy,
                Err(err) => warn!("TIMEKEEPER_REMOUNT: {err}"),
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from timekeeper.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TimekeeperConfig::default();
        assert!(!config.clock.hour24_mode);
        assert_eq!(config.animation.motion, MotionKind::Spring);
        assert_eq!(config.layout.hour_offset, 18.0);
        assert_eq!(config.layout.minute_offset, 30.0);
        assert_eq!(config.lifecycle.remount, RemountPolicy::ReplaySkip);
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = TimekeeperConfig::default();
        config.animation.easing = EasingName::EaseInOut;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: TimekeeperConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[clock]\nhour24_mode = true\n\n[animation]\nmotion = \"timed\"\neasing = \"ease-in\"\n\n[lifecycle]\nremount = \"animate\""
        )
        .unwrap();

        let config = TimekeeperConfig::load_from_file(file.path()).unwrap();
        assert!(config.clock.hour24_mode);
        assert_eq!(config.animation.motion, MotionKind::Timed);
        assert_eq!(config.animation.easing, EasingName::EaseIn);
        assert_eq!(config.animation.duration_ms, 300.0);
        assert_eq!(config.lifecycle.remount, RemountPolicy::Animate);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            TimekeeperConfig::load_from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[clock]\nhour24_mode = \"maybe\"").unwrap();
        assert!(matches!(
            TimekeeperConfig::load_from_file(&bad),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Spring".parse::<MotionKind>().unwrap(), MotionKind::Spring);
        assert_eq!("none".parse::<MotionKind>().unwrap(), MotionKind::Instant);
        assert!("bouncy".parse::<MotionKind>().is_err());
        assert_eq!(
            "replay-skip".parse::<RemountPolicy>().unwrap(),
            RemountPolicy::ReplaySkip
        );
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("TIMEKEEPER_HOUR24", "true");
            std::env::set_var("TIMEKEEPER_MOTION", "instant");
            std::env::set_var("TIMEKEEPER_DURATION_MS", "-5");
        }

        let mut config = TimekeeperConfig::default();
        config.merge_with_env();

        assert!(config.clock.hour24_mode);
        assert_eq!(config.animation.motion, MotionKind::Instant);
        // Negative durations are rejected
        assert_eq!(config.animation.duration_ms, 300.0);

        unsafe {
            std::env::remove_var("TIMEKEEPER_HOUR24");
            std::env::remove_var("TIMEKEEPER_MOTION");
            std::env::remove_var("TIMEKEEPER_DURATION_MS");
        }
    }
}
