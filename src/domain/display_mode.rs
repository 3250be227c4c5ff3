// Display mode - Which derived series a chart shows
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Series selection for a frame-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Nothing to display.
    #[default]
    None,
    Raw,
    Average,
    RawPlusAverage,
}

impl DisplayMode {
    pub fn shows_raw(self) -> bool {
        matches!(self, DisplayMode::Raw | DisplayMode::RawPlusAverage)
    }

    pub fn shows_average(self) -> bool {
        matches!(self, DisplayMode::Average | DisplayMode::RawPlusAverage)
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DisplayMode::None),
            "raw" => Ok(DisplayMode::Raw),
            "average" | "avg" => Ok(DisplayMode::Average),
            "both" | "rawplusaverage" | "raw+average" => Ok(DisplayMode::RawPlusAverage),
            other => Err(format!("unknown display mode {:?}", other)),
        }
    }
}

/// Filter switches as handed over by the selection UI.
///
/// The switches are independent booleans. When more than one is set they are
/// evaluated raw, then average, then raw-plus-average, and the last one that
/// is set wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayModeFlags {
    pub is_raw: bool,
    pub is_average: bool,
    pub is_raw_plus_average: bool,
}

impl From<DisplayModeFlags> for DisplayMode {
    fn from(flags: DisplayModeFlags) -> Self {
        let mut mode = DisplayMode::None;
        if flags.is_raw {
            mode = DisplayMode::Raw;
        }
        if flags.is_average {
            mode = DisplayMode::Average;
        }
        if flags.is_raw_plus_average {
            mode = DisplayMode::RawPlusAverage;
        }
        mode
    }
}

impl From<DisplayMode> for DisplayModeFlags {
    fn from(mode: DisplayMode) -> Self {
        Self {
            is_raw: mode == DisplayMode::Raw,
            is_average: mode == DisplayMode::Average,
            is_raw_plus_average: mode == DisplayMode::RawPlusAverage,
        }
    }
}
