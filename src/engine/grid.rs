//! Grid representation for the Game of Life engine

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell.
///
/// The transition is computed with a double buffer (read old grid, build
/// new grid), so no transient "was alive"/"was dead" markers are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// A dense, owned 2D buffer of cell states.
///
/// `width` and `height` are fixed for the grid's lifetime. Cells are
/// stored row-major. Public reads outside `[0,height) x [0,width)` fail
/// with [`EngineError::OutOfBounds`]; the clipped [`Grid::get`] used for
/// neighbor counting treats out-of-range coordinates as Dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellState>,
}

impl Grid {
    /// Create a new all-Dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        })
    }

    /// Create a grid from a 2D array of cell states.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(EngineError::RaggedPattern {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// An all-Dead grid with the same dimensions as `self`.
    pub fn empty_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![CellState::Dead; self.width * self.height],
        }
    }

    /// Convert 2D coordinates to the row-major index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Clipped read: out-of-range coordinates are Dead.
    ///
    /// The universe has a hard edge, not a wraparound; this is the read
    /// the neighbor count is built on.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> CellState {
        if self.in_bounds(row, col) {
            self.cells[self.index(row as usize, col as usize)]
        } else {
            CellState::Dead
        }
    }

    /// Bounds-checked read for external callers.
    pub fn state(&self, row: isize, col: isize) -> Result<CellState, EngineError> {
        if self.in_bounds(row, col) {
            Ok(self.cells[self.index(row as usize, col as usize)])
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), EngineError> {
        if row >= self.height || col >= self.width {
            return Err(EngineError::OutOfBounds {
                row: row as isize,
                col: col as isize,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = state;
        Ok(())
    }

    /// Coordinates of all Alive cells, in row-major order.
    ///
    /// Recomputed from scratch on every call; the sparse stepper must
    /// never reuse a stale alive set across generations.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        let mut alive = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.index(row, col)].is_alive() {
                    alive.push((row, col));
                }
            }
        }
        alive
    }

    /// Total number of Alive cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True if no cell is Alive (the absorbing all-Dead state).
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.cells[self.index(row, col)].is_alive() {
                    '█'
                } else {
                    '·'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
