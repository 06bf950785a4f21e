//! Seed patterns (stamps) and grid seeding

use super::grid::{CellState, Grid};
use crate::error::EngineError;
use anyhow::{Context, Result};
use std::path::Path;

/// A small dense sub-pattern used to seed a larger grid at an offset.
///
/// Text form: one line per row, '1' for Alive and '0' for Dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    cells: Vec<CellState>,
}

impl Pattern {
    /// Build a pattern from an explicit list of live coordinates.
    /// Dimensions are the tight bounding box from the origin.
    pub fn from_coords(coords: &[(usize, usize)]) -> Result<Self, EngineError> {
        if coords.is_empty() {
            return Err(EngineError::EmptyPattern);
        }
        let height = coords.iter().map(|&(row, _)| row).max().unwrap_or(0) + 1;
        let width = coords.iter().map(|&(_, col)| col).max().unwrap_or(0) + 1;
        let mut cells = vec![CellState::Dead; width * height];
        for &(row, col) in coords {
            cells[row * width + col] = CellState::Alive;
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a pattern from its text form. Blank lines and surrounding
    /// whitespace are ignored; every remaining row must have the same
    /// length.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(EngineError::EmptyPattern);
        }

        let height = lines.len();
        let width = lines[0].len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(EngineError::RaggedPattern {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '0' => cells.push(CellState::Dead),
                    '1' => cells.push(CellState::Alive),
                    _ => return Err(EngineError::InvalidPatternChar { ch, row, col }),
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Look up a builtin pattern by name.
    pub fn builtin(name: &str) -> Result<Self, EngineError> {
        let text = builtin_text(name).ok_or_else(|| EngineError::UnknownPattern(name.into()))?;
        Self::parse(text)
    }

    /// Coordinates of the pattern's Alive cells, relative to its origin.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }

    pub fn alive_len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("glider", "010\n001\n111\n"),
    ("blinker", "111\n"),
    ("block", "11\n11\n"),
    ("beacon", "1100\n1100\n0011\n0011\n"),
    ("r_pentomino", "011\n110\n010\n"),
];

fn builtin_text(name: &str) -> Option<&'static str> {
    BUILTIN_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, text)| *text)
}

/// Names of all builtin patterns.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_PATTERNS.iter().map(|(name, _)| *name).collect()
}

/// Place a pattern's Alive cells into `grid` at the given offset.
///
/// Clip-and-report policy: cells falling outside the grid are skipped
/// and the number of cells actually placed is returned. A pattern whose
/// live cells all fall outside the grid is a [`EngineError::NoOverlap`]
/// error rather than a silent no-op. Seeding is idempotent: cells are
/// only ever set to Alive.
pub fn seed(
    grid: &mut Grid,
    pattern: &Pattern,
    row_offset: isize,
    col_offset: isize,
) -> Result<usize, EngineError> {
    let mut placed = 0;
    for (row, col) in pattern.alive_cells() {
        let target_row = row as isize + row_offset;
        let target_col = col as isize + col_offset;
        if target_row >= 0
            && target_col >= 0
            && (target_row as usize) < grid.height
            && (target_col as usize) < grid.width
        {
            grid.set(target_row as usize, target_col as usize, CellState::Alive)?;
            placed += 1;
        }
    }
    if placed == 0 && pattern.alive_len() > 0 {
        return Err(EngineError::NoOverlap {
            row: row_offset,
            col: col_offset,
            width: grid.width,
            height: grid.height,
        });
    }
    Ok(placed)
}

/// Place an explicit coordinate list, same clip-and-report policy.
pub fn seed_coords(
    grid: &mut Grid,
    coords: &[(usize, usize)],
    row_offset: isize,
    col_offset: isize,
) -> Result<usize, EngineError> {
    let pattern = Pattern::from_coords(coords)?;
    seed(grid, &pattern, row_offset, col_offset)
}

/// Load a pattern from a text file.
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;
    Pattern::parse(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Write the builtin patterns out as example seed files.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, text) in BUILTIN_PATTERNS {
        let path = dir.join(format!("{}.txt", name));
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let pattern = Pattern::parse("010\n001\n111\n").unwrap();
        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 3);
        assert_eq!(pattern.alive_len(), 5);
        assert_eq!(
            pattern.alive_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Pattern::parse(""), Err(EngineError::EmptyPattern));
        assert_eq!(Pattern::parse("  \n \n"), Err(EngineError::EmptyPattern));
        assert_eq!(
            Pattern::parse("010\n01\n"),
            Err(EngineError::RaggedPattern {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            Pattern::parse("0X0\n"),
            Err(EngineError::InvalidPatternChar {
                ch: 'X',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn test_from_coords() {
        let pattern = Pattern::from_coords(&[(0, 1), (2, 0)]).unwrap();
        assert_eq!(pattern.height, 3);
        assert_eq!(pattern.width, 2);
        assert_eq!(pattern.alive_len(), 2);
        assert_eq!(
            Pattern::from_coords(&[]),
            Err(EngineError::EmptyPattern)
        );
    }

    #[test]
    fn test_builtin_lookup() {
        for name in builtin_names() {
            let pattern = Pattern::builtin(name).unwrap();
            assert!(pattern.alive_len() > 0, "{} has no live cells", name);
        }
        assert_eq!(Pattern::builtin("glider").unwrap().alive_len(), 5);
        assert!(matches!(
            Pattern::builtin("gosper"),
            Err(EngineError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_seed_places_at_offset() {
        let mut grid = Grid::new(10, 10).unwrap();
        let glider = Pattern::builtin("glider").unwrap();
        let placed = seed(&mut grid, &glider, 3, 4).unwrap();
        assert_eq!(placed, 5);
        assert_eq!(grid.alive_count(), 5);
        assert!(grid.state(3, 5).unwrap().is_alive());
        assert!(grid.state(5, 4).unwrap().is_alive());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut once = Grid::new(8, 8).unwrap();
        let block = Pattern::builtin("block").unwrap();
        seed(&mut once, &block, 2, 2).unwrap();
        let mut twice = once.clone();
        seed(&mut twice, &block, 2, 2).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_seed_clips_and_reports() {
        let mut grid = Grid::new(4, 4).unwrap();
        let block = Pattern::builtin("block").unwrap();
        // Bottom-right corner: only the top-left cell of the block fits.
        let placed = seed(&mut grid, &block, 3, 3).unwrap();
        assert_eq!(placed, 1);
        assert_eq!(grid.alive_count(), 1);

        // Negative offsets clip from the top-left the same way.
        let mut grid = Grid::new(4, 4).unwrap();
        let placed = seed(&mut grid, &block, -1, -1).unwrap();
        assert_eq!(placed, 1);
        assert!(grid.state(0, 0).unwrap().is_alive());
    }

    #[test]
    fn test_seed_with_no_overlap_errors() {
        let mut grid = Grid::new(4, 4).unwrap();
        let block = Pattern::builtin("block").unwrap();
        let result = seed(&mut grid, &block, 10, 10);
        assert!(matches!(result, Err(EngineError::NoOverlap { .. })));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_seed_coords() {
        let mut grid = Grid::new(5, 5).unwrap();
        let placed = seed_coords(&mut grid, &[(0, 0), (1, 1)], 1, 1).unwrap();
        assert_eq!(placed, 2);
        assert!(grid.state(1, 1).unwrap().is_alive());
        assert!(grid.state(2, 2).unwrap().is_alive());
    }

    #[test]
    fn test_pattern_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in builtin_names() {
            let path = temp_dir.path().join(format!("{}.txt", name));
            assert!(path.exists());
            let loaded = load_pattern_from_file(&path).unwrap();
            assert_eq!(loaded, Pattern::builtin(name).unwrap());
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = tempdir().unwrap();
        assert!(load_pattern_from_file(temp_dir.path().join("nope.txt")).is_err());
    }
}
