#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the Game of Life.
//!
//! The [`World`] owns everything the control loop mutates: the selected
//! colour and pattern, the grid history, the step counter, the cell size and
//! the simulation flag. It changes only through [`apply`] and is observed
//! through the [`query`] module.

use life_core::{
    CellColor, CellSize, Command, Event, Grid, GridError, GridSize, History, PatternName, Screen,
    Viewport,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Initial selections and geometry used to build a [`World`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldSettings {
    /// Drawable area the grid is fitted into.
    pub viewport: Viewport,
    /// Initial cell edge length.
    pub cell_size: CellSize,
    /// Initial live-cell colour.
    pub color: CellColor,
    /// Initial seed pattern.
    pub pattern: PatternName,
}

/// Errors raised while constructing a [`World`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The viewport cannot hold even one cell at some reachable cell size.
    #[error("viewport {width}x{height} cannot hold a single {cell_size} cell")]
    ViewportTooSmall {
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
        /// Cell size that does not fit.
        cell_size: CellSize,
        /// Underlying grid construction failure.
        #[source]
        source: GridError,
    },
}

/// Represents the authoritative Game of Life session.
#[derive(Debug)]
pub struct World {
    viewport: Viewport,
    screen: Screen,
    color: CellColor,
    pattern: PatternName,
    cell_size: CellSize,
    history: History<Grid>,
    step: u64,
    simulating: bool,
}

impl World {
    /// Creates a world sitting on the start screen.
    ///
    /// Fails when the viewport is too small for the largest cell size the
    /// player can reach, since resizing would then produce an empty grid.
    pub fn new(settings: WorldSettings) -> Result<Self, WorldError> {
        let WorldSettings {
            viewport,
            cell_size,
            color,
            pattern,
        } = settings;

        let _ = checked_grid_size(viewport, CellSize::MAX)?;
        let size = checked_grid_size(viewport, cell_size)?;

        Ok(Self {
            viewport,
            screen: Screen::Start,
            color,
            pattern,
            cell_size,
            history: History::new(Grid::new(size)),
            step: 0,
            simulating: false,
        })
    }

    fn start_session(&mut self, out_events: &mut Vec<Event>) {
        let Some(size) = self.grid_size_for(self.cell_size) else {
            return;
        };
        let grid = Grid::seeded(size, &self.pattern.pattern());
        info!(
            %size,
            pattern = %self.pattern,
            color = %self.color,
            population = grid.population(),
            "session started"
        );
        self.history.reset(grid);
        self.step = 0;
        self.screen = Screen::Running;
        out_events.push(Event::SessionStarted {
            size,
            pattern: self.pattern,
        });
    }

    fn resize(&mut self, cell_size: CellSize, out_events: &mut Vec<Event>) {
        let Some(size) = self.grid_size_for(cell_size) else {
            return;
        };
        self.cell_size = cell_size;
        self.history.reset(Grid::new(size));
        self.step = 0;
        info!(%cell_size, %size, "grid resized");
        out_events.push(Event::GridResized { cell_size, size });
    }

    fn grid_size_for(&self, cell_size: CellSize) -> Option<GridSize> {
        match self.viewport.grid_size(cell_size) {
            Ok(size) => Some(size),
            Err(error) => {
                warn!(%error, %cell_size, "cell size does not fit the viewport");
                None
            }
        }
    }

    fn is_running(&self) -> bool {
        self.screen == Screen::Running
    }
}

fn checked_grid_size(viewport: Viewport, cell_size: CellSize) -> Result<GridSize, WorldError> {
    viewport
        .grid_size(cell_size)
        .map_err(|source| WorldError::ViewportTooSmall {
            width: viewport.width(),
            height: viewport.height(),
            cell_size,
            source,
        })
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Commands that only make sense on the running screen are ignored while the
/// start screen is shown.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SelectColor { color } => {
            world.color = color;
            out_events.push(Event::ColorSelected { color });
        }
        Command::SelectPattern { pattern } => {
            world.pattern = pattern;
            out_events.push(Event::PatternSelected { pattern });
        }
        Command::StartSession => {
            if world.is_running() {
                debug!("session already running");
                return;
            }
            world.start_session(out_events);
        }
        command if !world.is_running() => {
            debug!(?command, "ignoring command on the start screen");
        }
        Command::ToggleCell { cell } => match world.history.current_mut().toggle(cell) {
            Ok(state) => out_events.push(Event::CellToggled {
                cell,
                alive: state.is_alive(),
            }),
            Err(error) => {
                warn!(%error, "toggle rejected");
                out_events.push(Event::CellToggleRejected { cell });
            }
        },
        Command::StepForward => out_events.push(Event::GenerationRequested),
        Command::Tick => {
            if world.simulating {
                out_events.push(Event::GenerationRequested);
            }
        }
        Command::CommitGeneration { next } => {
            let expected = world.history.current().size();
            let received = next.size();
            if expected != received {
                warn!(%expected, %received, "discarding generation of the wrong size");
                out_events.push(Event::GenerationRejected { expected, received });
                return;
            }
            world.history.push(next);
            world.step = world.step.saturating_add(1);
            out_events.push(Event::GenerationAdvanced { step: world.step });
        }
        Command::Undo => {
            if world.history.pop_undo().is_some() {
                world.step = world.step.saturating_sub(1);
                out_events.push(Event::GenerationUndone { step: world.step });
            } else {
                out_events.push(Event::UndoIgnored);
            }
        }
        Command::Clear => {
            let size = world.history.current().size();
            world.history.reset(Grid::new(size));
            world.step = 0;
            out_events.push(Event::GridCleared);
        }
        Command::GrowCells => world.resize(world.cell_size.grown(), out_events),
        Command::ShrinkCells => world.resize(world.cell_size.shrunk(), out_events),
        Command::ToggleSimulation => {
            world.simulating = !world.simulating;
            info!(running = world.simulating, "simulation toggled");
            out_events.push(Event::SimulationToggled {
                running: world.simulating,
            });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use life_core::{CellColor, CellSize, Grid, PatternName, Screen, Viewport};

    /// Screen currently presented.
    #[must_use]
    pub fn screen(world: &World) -> Screen {
        world.screen
    }

    /// Colour used for live cells.
    #[must_use]
    pub fn selected_color(world: &World) -> CellColor {
        world.color
    }

    /// Pattern seeded when the session starts.
    #[must_use]
    pub fn selected_pattern(world: &World) -> PatternName {
        world.pattern
    }

    /// Active grid, i.e. the newest history entry.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        world.history.current()
    }

    /// Generation number relative to the last reset.
    #[must_use]
    pub fn step_counter(world: &World) -> u64 {
        world.step
    }

    /// Number of retained snapshots, including the active grid.
    #[must_use]
    pub fn history_depth(world: &World) -> usize {
        world.history.depth()
    }

    /// Edge length of a drawn cell.
    #[must_use]
    pub fn cell_size(world: &World) -> CellSize {
        world.cell_size
    }

    /// Whether continuous simulation is active.
    #[must_use]
    pub fn is_simulating(world: &World) -> bool {
        world.simulating
    }

    /// Drawable area the grid is fitted into.
    #[must_use]
    pub fn viewport(world: &World) -> Viewport {
        world.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_too_small_for_largest_cells_is_rejected() {
        let settings = WorldSettings {
            viewport: Viewport::new(35, 600),
            ..WorldSettings::default()
        };

        let error = World::new(settings).expect_err("35px cannot fit a 40px cell");

        assert!(matches!(
            error,
            WorldError::ViewportTooSmall {
                cell_size: CellSize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn new_world_waits_on_start_screen() {
        let world = World::new(WorldSettings::default()).expect("default settings are valid");

        assert_eq!(query::screen(&world), Screen::Start);
        assert_eq!(query::step_counter(&world), 0);
        assert_eq!(query::history_depth(&world), 1);
        assert!(!query::is_simulating(&world));
    }

    #[test]
    fn running_commands_are_ignored_on_start_screen() {
        let mut world = World::new(WorldSettings::default()).expect("valid");
        let mut events = Vec::new();

        apply(&mut world, Command::StepForward, &mut events);
        apply(&mut world, Command::ToggleSimulation, &mut events);
        apply(&mut world, Command::GrowCells, &mut events);

        assert!(events.is_empty());
        assert_eq!(query::cell_size(&world), CellSize::DEFAULT);
        assert!(!query::is_simulating(&world));
    }
}
