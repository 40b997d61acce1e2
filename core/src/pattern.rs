//! Seed patterns offered on the start screen.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::UnknownPresetError;

/// Ordered set of live-cell offsets relative to an implicit bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    offsets: &'static [(u32, u32)],
}

impl Pattern {
    /// Creates a pattern from `(dx, dy)` offsets.
    #[must_use]
    pub const fn new(offsets: &'static [(u32, u32)]) -> Self {
        Self { offsets }
    }

    /// Live-cell offsets in declaration order.
    #[must_use]
    pub const fn offsets(&self) -> &'static [(u32, u32)] {
        self.offsets
    }

    /// Reports whether the pattern contains no live cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// One more than the largest horizontal offset, or zero when empty.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.offsets.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0)
    }

    /// One more than the largest vertical offset, or zero when empty.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.offsets.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0)
    }
}

const EMPTY: Pattern = Pattern::new(&[]);
const GLIDER: Pattern = Pattern::new(&[(0, 0), (1, 0), (2, 0), (0, 1), (1, 2)]);
// Shipped offsets; these are fragments rather than the textbook pulsar and acorn.
const PULSAR: Pattern = Pattern::new(&[(2, 4), (2, 5), (2, 6), (4, 2), (5, 2), (6, 2)]);
const ACORN: Pattern = Pattern::new(&[(5, 3), (6, 3), (6, 1), (8, 2), (9, 3), (10, 3), (11, 3)]);

/// Named entries of the predefined pattern catalog.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PatternName {
    /// No live cells.
    #[default]
    Empty,
    /// Five-cell spaceship.
    Glider,
    /// Six-cell pulsar quadrant.
    Pulsar,
    /// Seven-cell methuselah.
    Acorn,
}

impl PatternName {
    /// Every catalog entry in display order.
    pub const ALL: [Self; 4] = [Self::Empty, Self::Glider, Self::Pulsar, Self::Acorn];

    /// Upper-case label shown on buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Glider => "GLIDER",
            Self::Pulsar => "PULSAR",
            Self::Acorn => "ACORN",
        }
    }

    /// Resolves the name to its live-cell offsets.
    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Self::Empty => EMPTY,
            Self::Glider => GLIDER,
            Self::Pulsar => PULSAR,
            Self::Acorn => ACORN,
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PatternName {
    type Err = UnknownPresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownPresetError::new("pattern", value))
    }
}

impl TryFrom<String> for PatternName {
    type Error = UnknownPresetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
