//! Configuration settings for the simulation runner

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub stepper: StepperConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepperConfig {
    pub backend: StepperBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperBackend {
    Dense,
    Sparse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub pattern: PatternSource,
    pub row_offset: isize,
    pub col_offset: isize,
}

/// Where the seed pattern comes from: a builtin by name, or a text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSource {
    Builtin(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_each_generation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: 20,
                height: 20,
                generations: 10,
            },
            stepper: StepperConfig {
                backend: StepperBackend::Sparse,
            },
            input: InputConfig {
                pattern: PatternSource::Builtin("glider".to_string()),
                row_offset: 1,
                col_offset: 1,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_each_generation: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.width == 0 || self.simulation.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.width,
                self.simulation.height
            );
        }

        match &self.input.pattern {
            PatternSource::Builtin(name) => {
                if !crate::engine::pattern::builtin_names().contains(&name.as_str()) {
                    anyhow::bail!("Unknown builtin pattern: {}", name);
                }
            }
            PatternSource::File(path) => {
                if !path.exists() {
                    anyhow::bail!("Pattern file does not exist: {}", path.display());
                }
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some((width, height)) = cli_overrides.dimensions {
            self.simulation.width = width;
            self.simulation.height = height;
        }
        if let Some(backend) = cli_overrides.backend {
            self.stepper.backend = backend;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.pattern = PatternSource::Builtin(pattern.clone());
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern = PatternSource::File(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.show_each {
            self.output.show_each_generation = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub dimensions: Option<(usize, usize)>,
    pub backend: Option<StepperBackend>,
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub show_each: bool,
}
