//! Configuration management for the simulation runner

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, PatternSource, Settings,
    SimulationConfig, StepperBackend, StepperConfig,
};
