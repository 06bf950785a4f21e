//! Generation-stepping strategies

use super::grid::{CellState, Grid};
use super::neighborhood::Neighborhood;
use super::rules::Ruleset;
use crate::config::StepperBackend;
use itertools::Itertools;
use rayon::prelude::*;

/// A strategy that advances a grid one generation.
///
/// Every implementation must read exclusively from the frozen pre-tick
/// grid and build the next generation as a fresh buffer, so that no
/// cell's update can influence another cell's neighbor count within the
/// same tick.
pub trait Stepper {
    /// Produce the next generation of `grid`.
    fn step(&self, grid: &Grid, rules: &Ruleset, neighborhood: &Neighborhood) -> Grid;

    /// Advance `generations` sequential steps.
    ///
    /// The all-Dead grid is absorbing, so iteration stops early once no
    /// cell is alive; the result is identical either way.
    fn advance(
        &self,
        grid: &Grid,
        rules: &Ruleset,
        neighborhood: &Neighborhood,
        generations: usize,
    ) -> Grid {
        let mut current = grid.clone();
        for _ in 0..generations {
            if current.is_empty() {
                break;
            }
            current = self.step(&current, rules, neighborhood);
        }
        current
    }
}

/// Reference stepper: evaluates every coordinate, O(width x height) per
/// generation. Ground truth for any optimized stepper.
pub struct DenseStepper;

impl Stepper for DenseStepper {
    fn step(&self, grid: &Grid, rules: &Ruleset, neighborhood: &Neighborhood) -> Grid {
        let mut next = grid.empty_like();

        // Rows evaluate independently against the frozen grid.
        let next_cells: Vec<CellState> = (0..grid.height)
            .into_par_iter()
            .flat_map(|row| {
                (0..grid.width).into_par_iter().map(move |col| {
                    let neighbors = neighborhood.count_alive(grid, row, col);
                    let current = grid.cells[grid.index(row, col)];
                    rules.next_state(current, neighbors)
                })
            })
            .collect();

        next.cells = next_cells;
        next
    }
}

/// Optimized stepper: only cells within neighbor-distance 1 of a live
/// cell can change, so rule evaluation is restricted to that candidate
/// set. A Dead cell with no live neighbors has count 0 and no birth rule
/// can fire, so everything outside the set stays Dead.
pub struct SparseStepper;

impl Stepper for SparseStepper {
    fn step(&self, grid: &Grid, rules: &Ruleset, neighborhood: &Neighborhood) -> Grid {
        let mut next = grid.empty_like();

        // The alive set is derived fresh from the current grid each
        // generation, never carried over.
        let alive = grid.alive_cells();
        if alive.is_empty() {
            return next;
        }

        let candidates = alive
            .iter()
            .flat_map(|&(row, col)| {
                let origin = (row as isize, col as isize);
                neighborhood
                    .offsets()
                    .iter()
                    .map(move |&(dr, dc)| (origin.0 + dr, origin.1 + dc))
                    .chain(std::iter::once(origin))
            })
            .filter(|&(row, col)| {
                row >= 0
                    && col >= 0
                    && (row as usize) < grid.height
                    && (col as usize) < grid.width
            })
            .map(|(row, col)| (row as usize, col as usize))
            .unique();

        for (row, col) in candidates {
            let neighbors = neighborhood.count_alive(grid, row, col);
            let current = grid.cells[grid.index(row, col)];
            let idx = next.index(row, col);
            next.cells[idx] = rules.next_state(current, neighbors);
        }

        next
    }
}

/// Stepper instance selected by configuration.
pub enum UnifiedStepper {
    Dense(DenseStepper),
    Sparse(SparseStepper),
}

impl UnifiedStepper {
    pub fn new(backend: StepperBackend) -> Self {
        match backend {
            StepperBackend::Dense => UnifiedStepper::Dense(DenseStepper),
            StepperBackend::Sparse => UnifiedStepper::Sparse(SparseStepper),
        }
    }
}

impl Stepper for UnifiedStepper {
    fn step(&self, grid: &Grid, rules: &Ruleset, neighborhood: &Neighborhood) -> Grid {
        match self {
            UnifiedStepper::Dense(stepper) => stepper.step(grid, rules, neighborhood),
            UnifiedStepper::Sparse(stepper) => stepper.step(grid, rules, neighborhood),
        }
    }
}

/// Advance a grid with classic Life semantics: dense stepper, Conway
/// rules, Moore neighborhood.
pub fn advance(grid: &Grid, generations: usize) -> Grid {
    DenseStepper.advance(grid, &Ruleset::conway(), &Neighborhood::moore(), generations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pattern::{seed, Pattern};

    fn seeded(pattern: &str, size: usize, row: isize, col: isize) -> Grid {
        let mut grid = Grid::new(size, size).unwrap();
        let pattern = Pattern::builtin(pattern).unwrap();
        seed(&mut grid, &pattern, row, col).unwrap();
        grid
    }

    #[test]
    fn test_all_dead_is_absorbing() {
        let empty = Grid::new(8, 8).unwrap();
        assert_eq!(advance(&empty, 0), empty);
        assert_eq!(advance(&empty, 25), empty);
    }

    #[test]
    fn test_block_still_life() {
        let grid = seeded("block", 6, 2, 2);
        assert_eq!(advance(&grid, 1), grid);
        assert_eq!(advance(&grid, 10), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let grid = seeded("blinker", 5, 2, 1);
        let once = advance(&grid, 1);
        assert_ne!(once, grid);
        assert_eq!(advance(&once, 1), grid);
        assert_eq!(once.alive_count(), 3);
    }

    #[test]
    fn test_glider_translates_down_right() {
        let grid = seeded("glider", 10, 1, 1);
        let expected = seeded("glider", 10, 2, 2);
        assert_eq!(advance(&grid, 4), expected);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 0, CellState::Alive).unwrap();
        // Clipped boundary: the corner sees 0 live neighbors, not the
        // wrapped far edge, so underpopulation kills it.
        assert!(advance(&grid, 1).is_empty());
    }

    #[test]
    fn test_advance_is_deterministic() {
        let grid = seeded("r_pentomino", 20, 8, 8);
        assert_eq!(advance(&grid, 7), advance(&grid, 7));
    }

    #[test]
    fn test_sparse_matches_dense_every_generation() {
        let rules = Ruleset::conway();
        let moore = Neighborhood::moore();
        for name in ["glider", "blinker", "block", "beacon", "r_pentomino"] {
            let mut dense = seeded(name, 16, 5, 5);
            let mut sparse = dense.clone();
            for generation in 0..12 {
                dense = DenseStepper.step(&dense, &rules, &moore);
                sparse = SparseStepper.step(&sparse, &rules, &moore);
                assert_eq!(
                    dense, sparse,
                    "steppers diverged on {} at generation {}",
                    name, generation
                );
            }
        }
    }

    #[test]
    fn test_sparse_short_circuits_empty_grid() {
        let empty = Grid::new(4, 4).unwrap();
        let next = SparseStepper.step(&empty, &Ruleset::conway(), &Neighborhood::moore());
        assert_eq!(next, empty);
    }

    #[test]
    fn test_sparse_handles_edge_patterns() {
        // Glider seeded against the top-left edge: candidate clipping
        // must not panic or wrap.
        let rules = Ruleset::conway();
        let moore = Neighborhood::moore();
        let mut dense = seeded("glider", 8, 0, 0);
        let mut sparse = dense.clone();
        for _ in 0..20 {
            dense = DenseStepper.step(&dense, &rules, &moore);
            sparse = SparseStepper.step(&sparse, &rules, &moore);
            assert_eq!(dense, sparse);
        }
    }

    #[test]
    fn test_unified_stepper_dispatch() {
        let grid = seeded("blinker", 5, 2, 1);
        let dense = UnifiedStepper::new(StepperBackend::Dense);
        let sparse = UnifiedStepper::new(StepperBackend::Sparse);
        let rules = Ruleset::conway();
        let moore = Neighborhood::moore();
        assert_eq!(
            dense.advance(&grid, &rules, &moore, 3),
            sparse.advance(&grid, &rules, &moore, 3)
        );
    }

    #[test]
    fn test_von_neumann_neighborhood_changes_outcome() {
        // A blinker dies under Conway rules restricted to the 4-cell
        // orthogonal neighborhood: the center keeps 2 neighbors but the
        // ends see only 1.
        let grid = seeded("blinker", 5, 2, 1);
        let next = DenseStepper.step(&grid, &Ruleset::conway(), &Neighborhood::von_neumann());
        assert_eq!(next.alive_count(), 1);
        assert_eq!(next.state(2, 2).unwrap(), CellState::Alive);
    }
}
