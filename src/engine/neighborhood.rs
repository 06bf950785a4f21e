//! Neighborhood definitions and alive-neighbor counting

use super::grid::Grid;

/// A neighborhood as a value: the list of relative offsets a cell
/// interacts with. The boundary policy is always clipped — offsets that
/// land outside the grid count as Dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    offsets: Vec<(isize, isize)>,
}

impl Neighborhood {
    /// The 8-cell Moore neighborhood used by classic Life.
    pub fn moore() -> Self {
        Self {
            offsets: vec![
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
        }
    }

    /// The 4-cell von Neumann neighborhood (orthogonal only).
    pub fn von_neumann() -> Self {
        Self {
            offsets: vec![(-1, 0), (0, -1), (0, 1), (1, 0)],
        }
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    /// Count Alive neighbors of `(row, col)` in the current grid.
    ///
    /// A fixed number of clipped lookups, so O(1) per call.
    pub fn count_alive(&self, grid: &Grid, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &self.offsets {
            if grid.get(row as isize + dr, col as isize + dc).is_alive() {
                count += 1;
            }
        }
        count
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::moore()
    }
}
