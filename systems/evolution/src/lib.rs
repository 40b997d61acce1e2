#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Conway's rules on a toroidal grid, and the system that applies them.
//!
//! [`step`] is a pure function from one generation to the next. The
//! [`Evolution`] system answers [`Event::GenerationRequested`] by computing
//! successors of the active grid and proposing them through
//! [`Command::CommitGeneration`]; the world decides whether to accept them.

use life_core::{Cell, CellCoord, Command, Event, Grid};
use tracing::trace;

/// Relative positions of the eight cells surrounding a cell.
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Computes the next generation of `grid`.
///
/// Edges wrap around on both axes. The input is never modified; the result is
/// a freshly allocated grid of the same size.
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut next = Grid::new(size);
    for row in 0..size.rows() {
        for column in 0..size.columns() {
            let cell = CellCoord::new(column, row);
            let current = Cell::from_alive(grid.is_alive(cell));
            let state = next_state(current, live_neighbours(grid, cell));
            if state.is_alive() {
                // in range by construction of the loop bounds
                let _ = next.set(cell, state);
            }
        }
    }
    next
}

/// Counts live cells among the eight neighbours of `cell`, wrapping at the edges.
#[must_use]
pub fn live_neighbours(grid: &Grid, cell: CellCoord) -> u8 {
    let size = grid.size();
    let columns = i64::from(size.columns());
    let rows = i64::from(size.rows());
    let column = i64::from(cell.column());
    let row = i64::from(cell.row());

    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| {
            let x = (column + dx).rem_euclid(columns);
            let y = (row + dy).rem_euclid(rows);
            // rem_euclid keeps both values inside the u32 grid bounds
            CellCoord::new(x as u32, y as u32)
        })
        .map(|neighbour| u8::from(grid.is_alive(neighbour)))
        .sum()
}

/// Applies the birth and survival rule to a single cell.
///
/// A live cell survives with two or three live neighbours; a dead cell is born
/// with exactly three.
#[must_use]
pub const fn next_state(current: Cell, live_neighbours: u8) -> Cell {
    match (current, live_neighbours) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Pure system that turns generation requests into commit commands.
#[derive(Debug, Default)]
pub struct Evolution;

impl Evolution {
    /// Creates a new evolution system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Consumes world events and the active grid to emit generation commits.
    ///
    /// Several requests in one batch produce consecutive generations, each
    /// computed from the one proposed before it.
    pub fn handle(&mut self, events: &[Event], grid: &Grid, out: &mut Vec<Command>) {
        let requested = events
            .iter()
            .filter(|event| matches!(event, Event::GenerationRequested))
            .count();
        if requested == 0 {
            return;
        }

        let mut current = step(grid);
        for _ in 1..requested {
            let next = step(&current);
            out.push(Command::CommitGeneration {
                next: std::mem::replace(&mut current, next),
            });
        }
        trace!(
            requested,
            population = current.population(),
            "generation computed"
        );
        out.push(Command::CommitGeneration { next: current });
    }
}
