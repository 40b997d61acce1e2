//! Dense boolean cell matrix shared by the world and the evolution system.

use std::fmt;

use thiserror::Error;

use crate::Pattern;

/// Liveness state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The cell holds no life.
    #[default]
    Dead,
    /// The cell is populated.
    Alive,
}

impl Cell {
    /// Converts a boolean liveness flag into a cell state.
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// Reports whether the cell is populated.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Dimensions of a [`Grid`] measured in whole cells.
///
/// Both axes are strictly positive; the evolution rule is undefined otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a grid size, rejecting zero-length axes.
    pub const fn new(columns: u32, rows: u32) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroSized { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of cell columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cell rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells contained in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Reports whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row() as usize * self.columns as usize + cell.column() as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Errors raised by grid construction and cell access.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// One of the requested dimensions was zero.
    #[error("grid must have at least one column and one row (requested {columns}x{rows})")]
    ZeroSized {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// The coordinate falls outside the grid.
    #[error("cell {cell} lies outside the {size} grid")]
    OutOfRange {
        /// Offending coordinate.
        cell: CellCoord,
        /// Dimensions of the grid that rejected the access.
        size: GridSize,
    },
}

/// Rectangular matrix of cell states stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size.cell_count()],
        }
    }

    /// Creates an empty grid and centres `pattern` on it.
    #[must_use]
    pub fn seeded(size: GridSize, pattern: &Pattern) -> Self {
        let mut grid = Self::new(size);
        grid.place_pattern(pattern);
        grid
    }

    /// Creates a grid whose only live cells are the provided coordinates.
    pub fn with_alive<I>(size: GridSize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let mut grid = Self::new(size);
        for cell in alive {
            grid.set(cell, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the state of a cell, or `None` when it lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<Cell> {
        self.size
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether a cell is alive. Cells outside the grid are dead.
    #[must_use]
    pub fn is_alive(&self, cell: CellCoord) -> bool {
        self.get(cell).is_some_and(Cell::is_alive)
    }

    /// Overwrites the state of a cell.
    pub fn set(&mut self, cell: CellCoord, state: Cell) -> Result<(), GridError> {
        let slot = self.slot_mut(cell)?;
        *slot = state;
        Ok(())
    }

    /// Flips the state of a cell in place and returns the new state.
    ///
    /// Coordinates outside the grid leave it untouched.
    pub fn toggle(&mut self, cell: CellCoord) -> Result<Cell, GridError> {
        let slot = self.slot_mut(cell)?;
        *slot = slot.toggled();
        Ok(*slot)
    }

    /// Marks the cells of `pattern` alive, centred on the grid.
    ///
    /// The offset uses floor division of the spare room on each axis. Cells
    /// that land outside the grid are skipped.
    pub fn place_pattern(&mut self, pattern: &Pattern) {
        if pattern.is_empty() {
            return;
        }

        let offset_x = (i64::from(self.size.columns()) - i64::from(pattern.width())).div_euclid(2);
        let offset_y = (i64::from(self.size.rows()) - i64::from(pattern.height())).div_euclid(2);

        for &(dx, dy) in pattern.offsets() {
            let x = offset_x + i64::from(dx);
            let y = offset_y + i64::from(dy);
            let (Ok(column), Ok(row)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            let cell = CellCoord::new(column, row);
            if let Some(index) = self.size.index(cell) {
                self.cells[index] = Cell::Alive;
            }
        }
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates over the coordinates of live cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let columns = self.size.columns() as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| CellCoord::new((index % columns) as u32, (index / columns) as u32))
    }

    /// Iterates over the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size.columns() as usize)
    }

    fn slot_mut(&mut self, cell: CellCoord) -> Result<&mut Cell, GridError> {
        let size = self.size;
        size.index(cell)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GridError::OutOfRange { cell, size })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let glyph = if cell.is_alive() { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
