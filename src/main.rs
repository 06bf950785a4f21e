//! CLI runner for the Game of Life stepping engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    config::{CliOverrides, OutputFormat, Settings, StepperBackend},
    engine::{
        create_example_patterns, seed, DenseStepper, Grid, Neighborhood, Ruleset, SparseStepper,
        Stepper, UnifiedStepper,
    },
    load_pattern,
    utils::{ColorOutput, GridFormatter, RunSummary},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Game of Life generation-stepping engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Builtin seed pattern name (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed pattern file (overrides config)
        #[arg(long)]
        pattern_file: Option<PathBuf>,

        /// Grid width (overrides config; requires --height)
        #[arg(long, requires = "height")]
        width: Option<usize>,

        /// Grid height (overrides config; requires --width)
        #[arg(long, requires = "width")]
        height: Option<usize>,

        /// Stepper backend: dense or sparse (overrides config)
        #[arg(short, long)]
        backend: Option<String>,

        /// Output format: text or json (overrides config)
        #[arg(short, long)]
        format: Option<String>,

        /// Print every intermediate generation
        #[arg(long)]
        show_each: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check the sparse stepper against the dense reference, generation
    /// by generation
    Verify {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations to compare (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            generations,
            pattern,
            pattern_file,
            width,
            height,
            backend,
            format,
            show_each,
            verbose,
        } => {
            let overrides = CliOverrides {
                generations,
                dimensions: width.zip(height),
                backend: backend.as_deref().map(parse_backend).transpose()?,
                pattern,
                pattern_file,
                format: format.as_deref().map(parse_format).transpose()?,
                show_each,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Verify {
            config,
            generations,
        } => verify_command(config, generations),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn parse_backend(value: &str) -> Result<StepperBackend> {
    match value {
        "dense" => Ok(StepperBackend::Dense),
        "sparse" => Ok(StepperBackend::Sparse),
        other => anyhow::bail!("Unknown stepper backend '{}' (expected dense or sparse)", other),
    }
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("Unknown output format '{}' (expected text or json)", other),
    }
}

fn backend_name(backend: StepperBackend) -> &'static str {
    match backend {
        StepperBackend::Dense => "dense",
        StepperBackend::Sparse => "sparse",
    }
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    if verbose {
        println!("Configuration:");
        println!(
            "  Grid: {}x{}",
            settings.simulation.width, settings.simulation.height
        );
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Backend: {}", backend_name(settings.stepper.backend));
        println!("  Pattern: {:?}", settings.input.pattern);
        println!();
    }

    let mut grid = Grid::new(settings.simulation.width, settings.simulation.height)
        .context("Failed to create grid")?;
    let pattern = load_pattern(&settings)?;
    let placed = seed(
        &mut grid,
        &pattern,
        settings.input.row_offset,
        settings.input.col_offset,
    )
    .context("Failed to seed grid")?;

    if placed < pattern.alive_len() {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Pattern clipped: {} of {} cells placed",
                placed,
                pattern.alive_len()
            ))
        );
    }

    let initial_alive = grid.alive_count();
    let stepper = UnifiedStepper::new(settings.stepper.backend);
    let rules = Ruleset::conway();
    let neighborhood = Neighborhood::moore();

    let start_time = Instant::now();
    let final_grid = if settings.output.show_each_generation {
        println!("{}", GridFormatter::format_generation(0, &grid));
        let mut current = grid.clone();
        for generation in 1..=settings.simulation.generations {
            if current.is_empty() {
                break;
            }
            current = stepper.step(&current, &rules, &neighborhood);
            println!("{}", GridFormatter::format_generation(generation, &current));
        }
        current
    } else {
        stepper.advance(&grid, &rules, &neighborhood, settings.simulation.generations)
    };
    let elapsed = start_time.elapsed();

    let summary = RunSummary {
        width: settings.simulation.width,
        height: settings.simulation.height,
        backend: backend_name(settings.stepper.backend).to_string(),
        generations: settings.simulation.generations,
        initial_alive,
        final_alive: final_grid.alive_count(),
    };

    match settings.output.format {
        OutputFormat::Text => {
            println!("{}", GridFormatter::format_grid_compact(&final_grid));
            println!("{}", GridFormatter::format_run_summary(&summary));
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "✅ Advanced {} generation(s) in {:.3}s",
                    summary.generations,
                    elapsed.as_secs_f64()
                ))
            );
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn verify_command(config_path: PathBuf, generations: Option<usize>) -> Result<()> {
    let overrides = CliOverrides {
        generations,
        ..Default::default()
    };
    let settings = load_settings(&config_path, &overrides)?;

    println!(
        "{}",
        ColorOutput::info("🔍 Comparing sparse stepper against dense reference...")
    );

    let mut grid = Grid::new(settings.simulation.width, settings.simulation.height)
        .context("Failed to create grid")?;
    let pattern = load_pattern(&settings)?;
    seed(
        &mut grid,
        &pattern,
        settings.input.row_offset,
        settings.input.col_offset,
    )
    .context("Failed to seed grid")?;

    let rules = Ruleset::conway();
    let neighborhood = Neighborhood::moore();
    let mut dense = grid.clone();
    let mut sparse = grid;

    for generation in 1..=settings.simulation.generations {
        dense = DenseStepper.step(&dense, &rules, &neighborhood);
        sparse = SparseStepper.step(&sparse, &rules, &neighborhood);

        if dense != sparse {
            println!(
                "{}",
                ColorOutput::error(&format!("❌ Steppers diverged at generation {}", generation))
            );
            println!("Dense:");
            println!("{}", GridFormatter::format_grid_with_coords(&dense));
            println!("Sparse:");
            println!("{}", GridFormatter::format_grid_with_coords(&sparse));
            anyhow::bail!("Sparse stepper does not match dense reference");
        }
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Steppers agree on every cell for {} generation(s)",
            settings.simulation.generations
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit the configuration in {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Check the steppers: cargo run -- verify");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_engine",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--backend",
            "sparse",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_backend_and_format() {
        assert_eq!(parse_backend("dense").unwrap(), StepperBackend::Dense);
        assert_eq!(parse_backend("sparse").unwrap(), StepperBackend::Sparse);
        assert!(parse_backend("gpu").is_err());
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/patterns/glider.txt").exists());
    }

    #[test]
    fn test_verify_command_with_defaults() {
        // No config file in the temp dir: falls back to defaults, which
        // seed a glider and must keep both steppers in agreement.
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("missing.yaml");
        assert!(verify_command(config, Some(8)).is_ok());
    }
}
