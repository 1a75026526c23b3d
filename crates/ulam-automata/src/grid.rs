//! Stacking generations into a 2D grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::Automaton;
use crate::error::{AutomatonError, Result};

/// Largest number of cells a grid may hold.
///
/// Either dimension alone is bounded by the same value, so doubling a
/// dimension cannot overflow.
pub const MAX_CELLS: usize = 1 << 28;

/// Row-major grid of cell states, one row per generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridParts"))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

/// Checks both dimensions and returns the cell count.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&n| n <= MAX_CELLS && width <= MAX_CELLS && height <= MAX_CELLS)
        .ok_or(AutomatonError::GridTooLarge { width, height })
}

impl Grid {
    /// Creates a grid filled with state 0.
    ///
    /// Returns [`AutomatonError::GridTooLarge`] past [`MAX_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; len],
        })
    }

    /// Unchecked constructor for a reshaped copy of an existing grid's cells.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Builds a grid from rows of equal width.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, got)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(AutomatonError::RaggedGrid {
                row,
                expected: width,
                got,
            });
        }
        cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the width (cells per row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets a cell, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }

    /// Returns row `y`.
    pub fn row(&self, y: usize) -> Option<&[u32]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Converts into one vector per row.
    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }
}

/// Unchecked wire form of [`Grid`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridParts {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridParts> for Grid {
    type Error = AutomatonError;

    fn try_from(parts: GridParts) -> Result<Self> {
        let expected = cell_count(parts.width, parts.height)?;
        if parts.cells.len() != expected {
            return Err(AutomatonError::LengthMismatch {
                expected,
                got: parts.cells.len(),
            });
        }
        Ok(Self {
            width: parts.width,
            height: parts.height,
            cells: parts.cells,
        })
    }
}

/// Runs `automaton` from `starter` and stacks `height` generations.
///
/// Row 0 is a copy of the starter; row `t + 1` is the successor of row `t`.
/// Each row is computed from the finished row above it and lives in its own
/// slice of the grid, so no generation ever reads a partially written one.
pub fn generate(starter: &[u32], automaton: &Automaton, height: usize) -> Result<Grid> {
    automaton.validate_row(starter)?;

    let width = starter.len();
    let mut grid = Grid::new(width, height)?;
    if height == 0 {
        return Ok(grid);
    }
    grid.cells[..width].copy_from_slice(starter);

    for t in 1..height {
        let (done, rest) = grid.cells.split_at_mut(t * width);
        let prev = &done[(t - 1) * width..];
        automaton.step_into(prev, &mut rest[..width])?;
    }
    Ok(grid)
}
