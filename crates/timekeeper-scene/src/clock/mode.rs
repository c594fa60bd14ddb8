use serde::{Deserialize, Serialize};
use std::fmt;

/// Which numeral ring the clock is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Hour,
    Minute,
}

impl DisplayMode {
    /// The mode not currently displayed.
    pub fn other(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Hour,
        }
    }

    pub fn is_hour(self) -> bool {
        self == Self::Hour
    }

    pub fn is_minute(self) -> bool {
        self == Self::Minute
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
        })
    }
}
