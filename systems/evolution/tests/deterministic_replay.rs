use life_core::{CellCoord, Command, Event, Grid, GridSize, PatternName};
use life_system_evolution::{step, Evolution};
use life_world::{self as world, query, World, WorldSettings};

fn grid(columns: u32, rows: u32, alive: &[(u32, u32)]) -> Grid {
    let size = GridSize::new(columns, rows).expect("non-zero size");
    Grid::with_alive(
        size,
        alive.iter().map(|&(column, row)| CellCoord::new(column, row)),
    )
    .expect("cells in range")
}

fn shifted(grid: &Grid, dx: i64, dy: i64) -> Grid {
    let size = grid.size();
    let columns = i64::from(size.columns());
    let rows = i64::from(size.rows());
    let cells: Vec<_> = grid
        .iter_alive()
        .map(|cell| {
            let column = (i64::from(cell.column()) + dx).rem_euclid(columns);
            let row = (i64::from(cell.row()) + dy).rem_euclid(rows);
            CellCoord::new(column as u32, row as u32)
        })
        .collect();
    Grid::with_alive(size, cells).expect("wrapped cells stay in range")
}

fn generations(mut grid: Grid, count: usize) -> Grid {
    for _ in 0..count {
        grid = step(&grid);
    }
    grid
}

/// Drives the world and the evolution system the way the frame loop does.
fn run_frames(world: &mut World, evolution: &mut Evolution, frames: &[Command]) -> Vec<Event> {
    let mut log = Vec::new();
    for command in frames {
        let mut events = Vec::new();
        world::apply(world, command.clone(), &mut events);

        let mut follow_up = Vec::new();
        evolution.handle(&events, query::grid(world), &mut follow_up);
        log.append(&mut events);
        for command in follow_up {
            world::apply(world, command, &mut log);
        }
    }
    log
}

#[test]
fn glider_translates_one_cell_diagonally_every_four_generations() {
    let glider = grid(8, 6, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);

    assert_eq!(generations(glider.clone(), 4), shifted(&glider, 1, 1));
}

#[test]
fn shipped_glider_heads_towards_the_top_left_corner() {
    let seeded = Grid::seeded(
        GridSize::new(10, 10).expect("non-zero"),
        &PatternName::Glider.pattern(),
    );

    assert_eq!(generations(seeded.clone(), 4), shifted(&seeded, -1, -1));
}

#[test]
fn blinker_oscillates_across_the_wrapped_edge() {
    let vertical = grid(5, 5, &[(0, 4), (0, 0), (0, 1)]);
    let horizontal = grid(5, 5, &[(4, 0), (0, 0), (1, 0)]);

    assert_eq!(step(&vertical), horizontal);
    assert_eq!(step(&horizontal), vertical);
}

#[test]
fn blinker_has_period_two() {
    let blinker = grid(5, 5, &[(1, 0), (1, 1), (1, 2)]);

    assert_ne!(step(&blinker), blinker);
    assert_eq!(generations(blinker.clone(), 2), blinker);
}

#[test]
fn step_is_deterministic() {
    let acorn = Grid::seeded(
        GridSize::new(40, 30).expect("non-zero"),
        &PatternName::Acorn.pattern(),
    );

    assert_eq!(generations(acorn.clone(), 25), generations(acorn, 25));
}

#[test]
fn replaying_the_same_frames_yields_identical_sessions() {
    let frames = [
        Command::StartSession,
        Command::ToggleCell {
            cell: CellCoord::new(2, 2),
        },
        Command::StepForward,
        Command::ToggleSimulation,
        Command::Tick,
        Command::Tick,
        Command::Undo,
        Command::Tick,
    ];

    let replay = || {
        let mut world = World::new(WorldSettings {
            pattern: PatternName::Glider,
            ..WorldSettings::default()
        })
        .expect("default settings are valid");
        let mut evolution = Evolution::new();
        let log = run_frames(&mut world, &mut evolution, &frames);
        (log, query::grid(&world).clone(), query::step_counter(&world))
    };

    let (first_log, first_grid, first_step) = replay();
    let (second_log, second_grid, second_step) = replay();

    assert_eq!(first_log, second_log);
    assert_eq!(first_grid, second_grid);
    assert_eq!(first_step, 3);
    assert_eq!(second_step, first_step);
}

#[test]
fn simulated_ticks_match_manual_stepping() {
    let mut world = World::new(WorldSettings {
        pattern: PatternName::Acorn,
        ..WorldSettings::default()
    })
    .expect("default settings are valid");
    let mut evolution = Evolution::new();
    let seeded = {
        let _ = run_frames(&mut world, &mut evolution, &[Command::StartSession]);
        query::grid(&world).clone()
    };

    let log = run_frames(
        &mut world,
        &mut evolution,
        &[
            Command::ToggleSimulation,
            Command::Tick,
            Command::Tick,
            Command::Tick,
        ],
    );

    assert_eq!(query::grid(&world), &generations(seeded, 3));
    assert_eq!(query::step_counter(&world), 3);
    assert_eq!(query::history_depth(&world), 4);
    assert!(log.contains(&Event::GenerationAdvanced { step: 3 }));
}
