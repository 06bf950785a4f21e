//! Game of Life generation-stepping engine
//!
//! This library provides a pure, deterministic engine for advancing a
//! 2D cellular-automaton grid: a dense bounds-checked [`engine::Grid`],
//! an ordered first-match-wins [`engine::Ruleset`], and two equivalent
//! stepping strategies (dense reference and sparse optimized). Rendering,
//! input, and timing are the caller's concern; the engine only knows how
//! to produce the next generation.

pub mod config;
pub mod engine;
pub mod error;
pub mod utils;

pub use config::Settings;
pub use engine::{advance, seed, CellState, Grid, Neighborhood, Pattern, Ruleset, Stepper};
pub use error::EngineError;

use anyhow::{Context, Result};
use config::PatternSource;
use engine::{load_pattern_from_file, UnifiedStepper};

/// Outcome of a configured simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub initial: Grid,
    pub final_grid: Grid,
    pub generations: usize,
    pub cells_placed: usize,
}

/// Resolve the configured pattern source into a pattern.
pub fn load_pattern(settings: &Settings) -> Result<Pattern> {
    match &settings.input.pattern {
        PatternSource::Builtin(name) => {
            Pattern::builtin(name).with_context(|| format!("Unknown builtin pattern: {}", name))
        }
        PatternSource::File(path) => load_pattern_from_file(path),
    }
}

/// Build a grid from the settings, seed it, and advance it the
/// configured number of generations.
pub fn run_simulation(settings: &Settings) -> Result<SimulationRun> {
    let mut grid = Grid::new(settings.simulation.width, settings.simulation.height)
        .context("Failed to create grid")?;

    let pattern = load_pattern(settings)?;
    let cells_placed = seed(
        &mut grid,
        &pattern,
        settings.input.row_offset,
        settings.input.col_offset,
    )
    .context("Failed to seed grid")?;

    let stepper = UnifiedStepper::new(settings.stepper.backend);
    let final_grid = stepper.advance(
        &grid,
        &Ruleset::conway(),
        &Neighborhood::moore(),
        settings.simulation.generations,
    );

    Ok(SimulationRun {
        initial: grid,
        final_grid,
        generations: settings.simulation.generations,
        cells_placed,
    })
}
