//! Generation-stepping engine: grid, rules, and steppers

pub mod grid;
pub mod neighborhood;
pub mod pattern;
pub mod rules;
pub mod stepper;

pub use grid::{CellState, Grid};
pub use neighborhood::Neighborhood;
pub use pattern::{
    create_example_patterns, load_pattern_from_file, seed, seed_coords, Pattern,
};
pub use rules::{Rule, Ruleset};
pub use stepper::{advance, DenseStepper, SparseStepper, Stepper, UnifiedStepper};
