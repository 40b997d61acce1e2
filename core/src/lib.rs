#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game of Life workspace.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

mod grid;
mod history;
mod palette;
mod pattern;

pub use grid::{Cell, CellCoord, Grid, GridError, GridSize};
pub use history::History;
pub use palette::CellColor;
pub use pattern::{Pattern, PatternName};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title shown by the start screen and the window.
pub const GAME_TITLE: &str = "Game of Life";

/// Screen currently presented to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Selection of cell colour and seed pattern.
    #[default]
    Start,
    /// Interactive grid with the control panel.
    Running,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Chooses the colour used to draw live cells.
    SelectColor {
        /// Preset to activate.
        color: CellColor,
    },
    /// Chooses the pattern seeded when the session starts.
    SelectPattern {
        /// Catalog entry to seed.
        pattern: PatternName,
    },
    /// Leaves the start screen and seeds a fresh grid.
    StartSession,
    /// Flips a single cell of the active grid.
    ToggleCell {
        /// Cell to flip.
        cell: CellCoord,
    },
    /// Requests exactly one generation regardless of the simulation flag.
    StepForward,
    /// Advances the simulation clock by one tick.
    Tick,
    /// Installs the next generation computed by the evolution system.
    CommitGeneration {
        /// Successor of the active grid.
        next: Grid,
    },
    /// Reverts to the previous generation.
    Undo,
    /// Replaces the grid with an empty one of the same size.
    Clear,
    /// Enlarges cells by one step, shrinking the grid.
    GrowCells,
    /// Shrinks cells by one step, enlarging the grid.
    ShrinkCells,
    /// Starts or pauses continuous simulation.
    ToggleSimulation,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms the live-cell colour changed.
    ColorSelected {
        /// Colour now in use.
        color: CellColor,
    },
    /// Confirms the seed pattern changed.
    PatternSelected {
        /// Pattern now selected.
        pattern: PatternName,
    },
    /// Announces that a new session started with a freshly seeded grid.
    SessionStarted {
        /// Dimensions of the seeded grid.
        size: GridSize,
        /// Pattern placed on the grid.
        pattern: PatternName,
    },
    /// Confirms a cell was flipped.
    CellToggled {
        /// Cell that changed.
        cell: CellCoord,
        /// Whether the cell is alive afterwards.
        alive: bool,
    },
    /// Reports that a toggle targeted a cell outside the grid.
    CellToggleRejected {
        /// Offending coordinate.
        cell: CellCoord,
    },
    /// Asks the evolution system for the successor of the active grid.
    GenerationRequested,
    /// Confirms a new generation became active.
    GenerationAdvanced {
        /// Step counter after the advance.
        step: u64,
    },
    /// Reports that a committed generation did not match the active grid size.
    GenerationRejected {
        /// Size of the active grid.
        expected: GridSize,
        /// Size of the rejected grid.
        received: GridSize,
    },
    /// Confirms the previous generation was restored.
    GenerationUndone {
        /// Step counter after the undo.
        step: u64,
    },
    /// Reports that undo had nothing to revert.
    UndoIgnored,
    /// Confirms the grid was emptied.
    GridCleared,
    /// Confirms the cell size changed and the grid was rebuilt.
    GridResized {
        /// New cell edge length.
        cell_size: CellSize,
        /// Dimensions of the rebuilt grid.
        size: GridSize,
    },
    /// Announces a change of the simulation flag.
    SimulationToggled {
        /// Whether continuous simulation is active.
        running: bool,
    },
}

/// Edge length of a drawn cell in pixels, kept within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct CellSize(u32);

impl CellSize {
    /// Smallest permitted cell size.
    pub const MIN: Self = Self(10);
    /// Largest permitted cell size.
    pub const MAX: Self = Self(40);
    /// Size used when nothing else is configured.
    pub const DEFAULT: Self = Self(20);
    /// Increment applied by grow and shrink.
    pub const STEP: u32 = 10;

    /// Creates a cell size, clamping it into the permitted range.
    #[must_use]
    pub const fn new(pixels: u32) -> Self {
        if pixels < Self::MIN.0 {
            Self::MIN
        } else if pixels > Self::MAX.0 {
            Self::MAX
        } else {
            Self(pixels)
        }
    }

    /// Edge length in pixels.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Next larger size, saturating at [`CellSize::MAX`].
    #[must_use]
    pub const fn grown(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    /// Next smaller size, saturating at [`CellSize::MIN`].
    #[must_use]
    pub const fn shrunk(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for CellSize {
    fn from(pixels: u32) -> Self {
        Self::new(pixels)
    }
}

impl From<CellSize> for u32 {
    fn from(size: CellSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for CellSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Pixel dimensions of the drawable area the grid is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Viewport used when nothing else is configured.
    pub const DEFAULT: Self = Self::new(800, 600);

    /// Creates a viewport description.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of whole cells of `cell_size` that fit on each axis.
    pub const fn grid_size(&self, cell_size: CellSize) -> Result<GridSize, GridError> {
        GridSize::new(self.width / cell_size.get(), self.height / cell_size.get())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raised when a preset name does not match any catalog entry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} preset `{name}`")]
pub struct UnknownPresetError {
    kind: &'static str,
    name: String,
}

impl UnknownPresetError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
        }
    }

    /// Catalog that was searched.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Rejected name as provided.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
