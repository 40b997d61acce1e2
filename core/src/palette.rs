//! Colour presets available for live cells.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::UnknownPresetError;

/// Named colour applied to live cells.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum CellColor {
    /// Pure red.
    #[default]
    Red,
    /// Pure green.
    Green,
    /// Pure blue.
    Blue,
    /// Green and blue.
    Cyan,
    /// Red and green.
    Yellow,
    /// Red and blue.
    Magenta,
}

impl CellColor {
    /// Every preset in display order.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Cyan,
        Self::Yellow,
        Self::Magenta,
    ];

    /// Upper-case label shown on buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Cyan => "CYAN",
            Self::Yellow => "YELLOW",
            Self::Magenta => "MAGENTA",
        }
    }

    /// Byte RGB components of the preset.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
            Self::Cyan => [0, 255, 255],
            Self::Yellow => [255, 255, 0],
            Self::Magenta => [255, 0, 255],
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CellColor {
    type Err = UnknownPresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownPresetError::new("color", value))
    }
}

impl TryFrom<String> for CellColor {
    type Error = UnknownPresetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
