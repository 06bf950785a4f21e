//! Typed errors for the stepping engine

use thiserror::Error;

/// Errors produced by grid construction, addressing, and seeding.
///
/// All failures are immediate and local to the call that triggered them;
/// there is no partial-failure state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {height}x{width} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },

    #[error("pattern at offset ({row}, {col}) has no overlap with {height}x{width} grid")]
    NoOverlap {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },

    #[error("invalid character '{ch}' at ({row}, {col}) in pattern text, expected '0' or '1'")]
    InvalidPatternChar { ch: char, row: usize, col: usize },

    #[error("pattern row {row} has length {len}, expected {expected}")]
    RaggedPattern {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("pattern text is empty")]
    EmptyPattern,

    #[error("unknown builtin pattern '{0}'")]
    UnknownPattern(String),
}
