use std::collections::HashSet;
use std::fmt;

use pathstep_core::Pos;

use crate::state::{NO_PARENT, SearchState};

/// An ordered route from start to goal, both inclusive.
///
/// Consecutive cells are exactly one orthogonal step apart and no cell
/// repeats. The length is the node count, not the edge count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Pos>);

impl Path {
    /// Build a path from raw cells, or `None` if they do not form one.
    pub fn from_cells(cells: Vec<Pos>) -> Option<Self> {
        let path = Self(cells);
        path.is_connected().then_some(path)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.0
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.0.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Pos> {
        self.0.last().copied()
    }

    /// Cells strictly between start and goal.
    pub fn interior(&self) -> &[Pos] {
        if self.0.len() < 2 {
            return &[];
        }
        &self.0[1..self.0.len() - 1]
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.0.contains(&p)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.0.iter()
    }

    /// Whether every step moves exactly one row or column and no cell
    /// repeats. Empty sequences are not paths.
    pub fn is_connected(&self) -> bool {
        if self.0.is_empty() {
            return false;
        }
        let steps_ok = self.0.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let mut seen = HashSet::with_capacity(self.0.len());
        steps_ok && self.0.iter().all(|p| seen.insert(*p))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Walk the predecessor links from `goal` back to the cell that has none
/// (the start) and return the route in start → goal order.
pub(crate) fn reconstruct(state: &SearchState, goal: Pos) -> Path {
    let mut cells = Vec::new();
    let Some(mut ci) = state.bounds.index(goal) else {
        return Path(cells);
    };
    loop {
        cells.push(state.bounds.pos(ci));
        let parent = state.node(ci).parent;
        if parent == NO_PARENT {
            break;
        }
        ci = parent;
    }
    cells.reverse();
    Path(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathstep_core::Bounds;

    fn cells(v: &[(i32, i32)]) -> Vec<Pos> {
        v.iter().map(|&(r, c)| Pos::new(r, c)).collect()
    }

    #[test]
    fn from_cells_validates_steps() {
        assert!(Path::from_cells(cells(&[(0, 0), (0, 1), (1, 1)])).is_some());
        // Diagonal step.
        assert!(Path::from_cells(cells(&[(0, 0), (1, 1)])).is_none());
        // Repeated cell.
        assert!(Path::from_cells(cells(&[(0, 0), (0, 1), (0, 0)])).is_none());
        assert!(Path::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn interior_excludes_endpoints() {
        let p = Path::from_cells(cells(&[(0, 0), (0, 1), (0, 2), (1, 2)])).unwrap();
        assert_eq!(p.interior(), &cells(&[(0, 1), (0, 2)])[..]);
        assert_eq!(p.start(), Some(Pos::new(0, 0)));
        assert_eq!(p.goal(), Some(Pos::new(1, 2)));

        let short = Path::from_cells(cells(&[(0, 0), (0, 1)])).unwrap();
        assert!(short.interior().is_empty());
    }

    #[test]
    fn reconstruct_follows_parents() {
        let b = Bounds::new(5, 5);
        let mut st = SearchState::new(b);
        let chain = cells(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        for w in chain.windows(2) {
            let child = b.index(w[1]).unwrap();
            st.node_mut(child).parent = b.index(w[0]).unwrap();
        }
        let path = reconstruct(&st, Pos::new(2, 1));
        assert_eq!(path.cells(), &chain[..]);
        assert!(path.is_connected());
    }

    #[test]
    fn display_lists_cells() {
        let p = Path::from_cells(cells(&[(0, 0), (0, 1)])).unwrap();
        assert_eq!(p.to_string(), "(0, 0) -> (0, 1)");
    }
}
