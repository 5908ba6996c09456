//! Errors raised by the grid model.

use std::fmt;

use crate::geom::Pos;

/// Errors that can occur when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested rows or columns below [`MIN_SIDE`](crate::grid::MIN_SIDE).
    InvalidDimensions { rows: i32, cols: i32 },
    /// Lines of an ASCII layout have different widths.
    InconsistentWidth { line: usize },
    /// A character other than `#` or `.` in an ASCII layout.
    InvalidGlyph { ch: char, pos: Pos },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid grid dimensions {rows}x{cols}: both sides must be at least {}",
                crate::grid::MIN_SIDE
            ),
            Self::InconsistentWidth { line } => {
                write!(f, "layout line {line} has a different width than the first line")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
