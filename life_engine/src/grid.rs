// grid.rs - Toroidal board state

use rand::Rng;

use crate::error::SimulationError;

/// Fixed-size board of dead/live cells with wrap-around adjacency.
///
/// Coordinates are `(row, col)` with row 0 at the top. Reads wrap modulo the
/// board dimensions, so the board has no edge; direct writes do not wrap and
/// reject out-of-range indices with [`SimulationError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell states.
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead board. Dimensions are fixed for its lifetime.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Rebuilds a board from a row-major cell buffer of matching size.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major read-only view of the cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Reads a cell. Any integer coordinates are accepted; both are wrapped
    /// into range first, so e.g. `get(-1, -1)` reads the bottom-right corner.
    pub fn get(&self, row: i64, col: i64) -> bool {
        let row = row.rem_euclid(self.height as i64) as usize;
        let col = col.rem_euclid(self.width as i64) as usize;
        self.cells[row * self.width + col]
    }

    /// Writes one cell directly. Unlike [`Grid::get`], indices do not wrap:
    /// a direct edit outside the board is the caller's mistake and comes
    /// back as an error.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), SimulationError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state. Same indexing contract as
    /// [`Grid::set`].
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, SimulationError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, SimulationError> {
        if row >= self.height || col >= self.width {
            return Err(SimulationError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    /// Number of live cells among the 8 surrounding (wrapped) neighbors.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.get(row as i64 + dr, col as i64 + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets each cell live with probability 0.5, drawn from `rng`.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = rng.random_bool(0.5);
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
