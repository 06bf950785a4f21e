//! Display and output formatting utilities

use crate::engine::Grid;
use serde::Serialize;

/// Format grids and run results for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Compact grid rendering, one character per cell
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height * (grid.width + 1));
        for row in 0..grid.height {
            for col in 0..grid.width {
                let alive = grid.cells[grid.index(row, col)].is_alive();
                output.push(if alive { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Grid rendering with row/column coordinate labels
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("    ");
        for col in 0..grid.width {
            output.push_str(&format!("{}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.height {
            output.push_str(&format!("{:3} ", row));
            for col in 0..grid.width {
                let alive = grid.cells[grid.index(row, col)].is_alive();
                output.push(if alive { '█' } else { '·' });
            }
            output.push('\n');
        }

        output
    }

    /// One generation of a run, with its alive count
    pub fn format_generation(generation: usize, grid: &Grid) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Generation {} (Alive: {}):\n",
            generation,
            grid.alive_count()
        ));
        output.push_str(&Self::format_grid_compact(grid));
        output
    }

    /// Human-readable summary of a finished run
    pub fn format_run_summary(summary: &RunSummary) -> String {
        let mut output = String::new();
        output.push_str("=== Run Summary ===\n");
        output.push_str(&format!(
            "Grid: {}x{}\n",
            summary.width, summary.height
        ));
        output.push_str(&format!("Backend: {}\n", summary.backend));
        output.push_str(&format!("Generations: {}\n", summary.generations));
        output.push_str(&format!(
            "Alive Cells: {} → {}\n",
            summary.initial_alive, summary.final_alive
        ));
        if summary.final_alive == 0 {
            output.push_str("Reached the absorbing all-dead state\n");
        }
        output
    }
}

/// Serializable summary of a simulation run, for `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub backend: String,
    pub generations: usize,
    pub initial_alive: usize,
    pub final_alive: usize,
}

/// Colored console output helper
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
