//! Frame-by-frame orchestration of the world and the evolution system.

use std::time::Duration;

use life_core::{Command, Event, Screen};
use life_rendering::{FrameInput, GridScene, Scene, StartScene, UiAction};
use life_system_evolution::Evolution;
use life_world::{self as world, query, World, WorldError};
use tracing::debug;

use crate::config::Settings;

/// Upper bound on generations produced by a single slow frame.
const MAX_TICKS_PER_FRAME: u32 = 4;

/// Converts frame time into a whole number of simulation ticks.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// Creates a clock firing `ticks_per_second` times per second.
    pub(crate) fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `dt` and returns how many ticks became due.
    ///
    /// Backlog beyond [`MAX_TICKS_PER_FRAME`] is discarded.
    pub(crate) fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulated += dt;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
            if due == MAX_TICKS_PER_FRAME {
                self.accumulated = Duration::ZERO;
                break;
            }
        }
        due
    }

    /// Drops any partially accumulated interval.
    pub(crate) fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Maps a user intent onto the world command that carries it out.
fn command_for(action: UiAction) -> Command {
    match action {
        UiAction::SelectColor(color) => Command::SelectColor { color },
        UiAction::SelectPattern(pattern) => Command::SelectPattern { pattern },
        UiAction::Start => Command::StartSession,
        UiAction::ToggleCell(cell) => Command::ToggleCell { cell },
        UiAction::StepForward => Command::StepForward,
        UiAction::Undo => Command::Undo,
        UiAction::Clear => Command::Clear,
        UiAction::Grow => Command::GrowCells,
        UiAction::Shrink => Command::ShrinkCells,
        UiAction::ToggleSimulation => Command::ToggleSimulation,
    }
}

/// Owns the world and systems driven by the rendering loop.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    evolution: Evolution,
    clock: TickClock,
}

impl Session {
    /// Builds a session, optionally skipping the start screen.
    pub(crate) fn new(settings: &Settings) -> Result<Self, WorldError> {
        let mut session = Self {
            world: World::new(settings.world)?,
            evolution: Evolution::new(),
            clock: TickClock::new(settings.ticks_per_second),
        };
        if settings.skip_start_screen {
            session.execute(Command::StartSession);
        }
        Ok(session)
    }

    /// Applies one frame of input and elapsed time, then returns the scene to draw.
    pub(crate) fn advance(&mut self, dt: Duration, input: FrameInput) -> Scene {
        let ticks = if query::is_simulating(&self.world) {
            self.clock.advance(dt)
        } else {
            self.clock.reset();
            0
        };

        for action in input.actions {
            self.execute(command_for(action));
        }
        for _ in 0..ticks {
            self.execute(Command::Tick);
        }

        self.scene()
    }

    /// Describes the current world state for the renderer.
    pub(crate) fn scene(&self) -> Scene {
        match query::screen(&self.world) {
            Screen::Start => Scene::Start(StartScene {
                color: query::selected_color(&self.world),
                pattern: query::selected_pattern(&self.world),
            }),
            Screen::Running => Scene::Running(GridScene {
                grid: query::grid(&self.world).clone(),
                cell_size: query::cell_size(&self.world),
                color: query::selected_color(&self.world),
                step: query::step_counter(&self.world),
                simulating: query::is_simulating(&self.world),
            }),
        }
    }

    fn execute(&mut self, command: Command) {
        debug!(?command, "applying command");
        let mut events: Vec<Event> = Vec::new();
        world::apply(&mut self.world, command, &mut events);

        let mut follow_ups = Vec::new();
        self.evolution
            .handle(&events, query::grid(&self.world), &mut follow_ups);

        for command in follow_ups {
            world::apply(&mut self.world, command, &mut events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{CellColor, CellCoord, PatternName};
    use life_world::WorldSettings;

    fn settings(skip_start_screen: bool) -> Settings {
        Settings {
            world: WorldSettings {
                pattern: PatternName::Glider,
                ..WorldSettings::default()
            },
            ticks_per_second: 10,
            skip_start_screen,
            vsync: true,
            show_fps: false,
            log_filter: "info".to_owned(),
        }
    }

    fn input(actions: &[UiAction]) -> FrameInput {
        FrameInput {
            actions: actions.to_vec(),
        }
    }

    fn running(scene: Scene) -> GridScene {
        match scene {
            Scene::Running(grid) => grid,
            other => panic!("expected the grid, got {other:?}"),
        }
    }

    #[test]
    fn tick_clock_fires_once_per_interval() {
        let mut clock = TickClock::new(10);

        assert_eq!(clock.advance(Duration::from_millis(60)), 0);
        assert_eq!(clock.advance(Duration::from_millis(60)), 1);
        assert_eq!(clock.advance(Duration::from_millis(80)), 1);
        assert_eq!(clock.advance(Duration::from_millis(50)), 0);
    }

    #[test]
    fn tick_clock_caps_backlog_from_slow_frames() {
        let mut clock = TickClock::new(10);

        assert_eq!(clock.advance(Duration::from_secs(3)), MAX_TICKS_PER_FRAME);
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn start_screen_selections_flow_into_the_scene() {
        let mut session = Session::new(&settings(false)).expect("valid settings");

        let scene = session.advance(
            Duration::ZERO,
            input(&[
                UiAction::SelectColor(CellColor::Yellow),
                UiAction::SelectPattern(PatternName::Pulsar),
            ]),
        );

        assert_eq!(
            scene,
            Scene::Start(StartScene {
                color: CellColor::Yellow,
                pattern: PatternName::Pulsar,
            })
        );
    }

    #[test]
    fn skipping_the_start_screen_seeds_the_grid() {
        let session = Session::new(&settings(true)).expect("valid settings");

        let grid = running(session.scene());

        assert_eq!(grid.grid.population(), 5);
        assert_eq!(grid.step, 0);
    }

    #[test]
    fn step_and_undo_round_trip_through_the_session() {
        let mut session = Session::new(&settings(true)).expect("valid settings");
        let seeded = running(session.scene()).grid;

        let stepped = running(session.advance(Duration::ZERO, input(&[UiAction::StepForward])));
        let undone = running(session.advance(Duration::ZERO, input(&[UiAction::Undo])));

        assert_eq!(stepped.step, 1);
        assert_ne!(stepped.grid, seeded);
        assert_eq!(undone.step, 0);
        assert_eq!(undone.grid, seeded);
    }

    #[test]
    fn simulation_advances_with_elapsed_time_only_while_running() {
        let mut session = Session::new(&settings(true)).expect("valid settings");

        let paused = running(session.advance(Duration::from_millis(500), FrameInput::default()));
        let toggled = running(session.advance(
            Duration::from_millis(500),
            input(&[UiAction::ToggleSimulation]),
        ));
        let simulated = running(session.advance(Duration::from_millis(250), FrameInput::default()));

        assert_eq!(paused.step, 0);
        assert!(toggled.simulating);
        assert_eq!(toggled.step, 0, "clock starts only once simulation is on");
        assert_eq!(simulated.step, 2);
    }

    #[test]
    fn toggling_a_cell_shows_up_in_the_scene() {
        let mut session = Session::new(&settings(true)).expect("valid settings");

        let grid = running(session.advance(
            Duration::ZERO,
            input(&[UiAction::ToggleCell(CellCoord::new(0, 0))]),
        ));

        assert!(grid.grid.is_alive(CellCoord::new(0, 0)));
    }
}
