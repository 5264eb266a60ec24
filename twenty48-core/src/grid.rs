//! 4x4 tile grid and quarter-turn rotation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid side length
pub const SIZE: usize = 4;

/// Number of cells on the grid
pub const CELLS: usize = SIZE * SIZE;

/// Row-major 4x4 grid of tile values; 0 is an empty cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    pub const fn new(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub const fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[u32; SIZE]; SIZE] {
        &mut self.cells
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(CELLS);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Rotate counter-clockwise by `quarter_turns` (taken mod 4)
    ///
    /// Turning by `k` and then by `(4 - k) % 4` gives back the original grid.
    pub fn rotated(&self, quarter_turns: u8) -> Grid {
        let mut out = *self;
        for _ in 0..quarter_turns % 4 {
            out = out.rotated_once();
        }
        out
    }

    fn rotated_once(&self) -> Grid {
        let mut out = Grid::empty();
        for r in 0..SIZE {
            for c in 0..SIZE {
                out.cells[r][c] = self.cells[c][SIZE - 1 - r];
            }
        }
        out
    }
}

impl From<[[u32; SIZE]; SIZE]> for Grid {
    fn from(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self::new(cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, &value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
