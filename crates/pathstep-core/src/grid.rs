//! The [`Grid`] type: a `rows × cols` field of open and blocked cells.
//!
//! The grid is plain data: it knows nothing about search endpoints or runs.
//! It is owned by whoever drives the search and is only borrowed by the
//! engine for the duration of a step.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Pos};

/// Smallest accepted number of rows and columns.
pub const MIN_SIDE: i32 = 5;

const BLOCKED: char = '#';
const OPEN: char = '.';

/// A rectangular field of blocked/open flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create an all-open grid.
    ///
    /// Fails with [`GridError::InvalidDimensions`] when either side is below
    /// [`MIN_SIDE`].
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        validate_dimensions(rows, cols)?;
        let bounds = Bounds::new(rows, cols);
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
        })
    }

    /// Parse an ASCII layout: `#` is blocked, `.` is open, one line per row.
    ///
    /// Surrounding whitespace and blank lines are ignored so layouts can be
    /// written as indented string literals.
    pub fn parse(layout: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut grid = Self::new(rows, cols)?;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(GridError::InconsistentWidth { line: row });
            }
            for (col, ch) in line.chars().enumerate() {
                let p = Pos::new(row as i32, col as i32);
                match ch {
                    BLOCKED => {
                        grid.set_blocked(p, true);
                    }
                    OPEN => {}
                    _ => return Err(GridError::InvalidGlyph { ch, pos: p }),
                }
            }
        }
        Ok(grid)
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The blocked flag at `p`, or `None` outside the grid.
    #[inline]
    pub fn is_blocked(&self, p: Pos) -> Option<bool> {
        self.bounds.index(p).map(|i| self.blocked[i])
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.is_blocked(p) == Some(false)
    }

    /// Set the blocked flag at `p`, returning the previous value.
    /// Returns `None` (and does nothing) outside the grid.
    pub fn set_blocked(&mut self, p: Pos, blocked: bool) -> Option<bool> {
        let i = self.bounds.index(p)?;
        Some(std::mem::replace(&mut self.blocked[i], blocked))
    }

    /// Flip the blocked flag at `p`, returning the new value.
    pub fn toggle(&mut self, p: Pos) -> Option<bool> {
        let i = self.bounds.index(p)?;
        self.blocked[i] = !self.blocked[i];
        Some(self.blocked[i])
    }

    /// Open every cell.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Row-major iterator over `(Pos, blocked)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, bool)> + '_ {
        self.bounds.iter().zip(self.blocked.iter().copied())
    }
}

/// Check requested dimensions without touching any grid.
pub fn validate_dimensions(rows: i32, cols: i32) -> Result<(), GridError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.cols() {
                let blocked = self.is_blocked(Pos::new(row, col)) == Some(true);
                write!(f, "{}", if blocked { BLOCKED } else { OPEN })?;
            }
        }
        Ok(())
    }
}

// The layout string is the serialized form so that a deserialized grid is
// always validated by `parse`.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let layout = String::deserialize(deserializer)?;
        Grid::parse(&layout).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        .....
        .###.
        .....
        .#...
        .....";

    #[test]
    fn new_rejects_small_sides() {
        assert_eq!(
            Grid::new(4, 10),
            Err(GridError::InvalidDimensions { rows: 4, cols: 10 })
        );
        assert!(Grid::new(5, 4).is_err());
        let g = Grid::new(5, 7).unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 7);
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn set_and_toggle() {
        let mut g = Grid::new(5, 5).unwrap();
        let p = Pos::new(2, 3);
        assert_eq!(g.set_blocked(p, true), Some(false));
        assert_eq!(g.is_blocked(p), Some(true));
        assert!(!g.is_open(p));
        assert_eq!(g.toggle(p), Some(false));
        assert!(g.is_open(p));
        assert_eq!(g.toggle(Pos::new(9, 9)), None);
        assert_eq!(g.is_blocked(Pos::new(-1, 0)), None);
        assert!(!g.is_open(Pos::new(-1, 0)));
    }

    #[test]
    fn parse_and_display() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.bounds(), Bounds::new(5, 5));
        assert_eq!(g.blocked_count(), 4);
        assert_eq!(g.is_blocked(Pos::new(1, 2)), Some(true));
        assert_eq!(g.is_blocked(Pos::new(3, 1)), Some(true));
        assert_eq!(g.to_string(), ".....\n.###.\n.....\n.#...\n.....");
    }

    #[test]
    fn parse_rejects_bad_layouts() {
        assert_eq!(
            Grid::parse(".....\n.....\n....\n.....\n....."),
            Err(GridError::InconsistentWidth { line: 2 })
        );
        assert_eq!(
            Grid::parse(".....\n..x..\n.....\n.....\n....."),
            Err(GridError::InvalidGlyph {
                ch: 'x',
                pos: Pos::new(1, 2)
            })
        );
        assert!(matches!(
            Grid::parse("...\n..."),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn clear_opens_everything() {
        let mut g = Grid::parse(ROOM).unwrap();
        g.clear();
        assert_eq!(g.blocked_count(), 0);
        assert!(g.iter().all(|(_, b)| !b));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(5, 6).unwrap();
        g.set_blocked(Pos::new(1, 4), true);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn malformed_layout_fails_to_deserialize() {
        let res: Result<Grid, _> = serde_json::from_str("\"..\\n..\"");
        assert!(res.is_err());
    }
}
