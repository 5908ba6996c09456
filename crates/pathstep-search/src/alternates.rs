//! Best-effort discovery of other routes as short as the canonical one.
//!
//! Each interior cell of the canonical path is excluded in turn and the
//! search is re-run. Routes that only appear when several cells are excluded
//! together are never found; the set is a sample, not an enumeration of all
//! shortest paths.

use pathstep_core::{Bounds, Pos};

use crate::engine::Search;
use crate::error::SearchError;
use crate::path::Path;
use crate::traits::Pather;

/// Most routes a [`PathSet`] holds, canonical path included.
pub const MAX_PATHS: usize = 20;

/// Equal-length routes with a cursor for cycling through them.
///
/// The first entry is always the canonical path; entries are distinct as
/// exact cell sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    paths: Vec<Path>,
    current: usize,
}

impl PathSet {
    /// A set holding only `canonical`.
    pub fn new(canonical: Path) -> Self {
        Self {
            paths: vec![canonical],
            current: 0,
        }
    }

    /// Add `path` if there is room, it has the canonical length, and it is
    /// not already present. Returns whether it was added.
    pub fn try_push(&mut self, path: Path) -> bool {
        if self.is_full() || path.len() != self.canonical().len() || self.paths.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.paths.len() >= MAX_PATHS
    }

    /// Node count shared by every route.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.canonical().len()
    }

    #[inline]
    pub fn canonical(&self) -> &Path {
        &self.paths[0]
    }

    pub fn get(&self, i: usize) -> Option<&Path> {
        self.paths.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// The route the cursor points at.
    #[inline]
    pub fn current(&self) -> &Path {
        &self.paths[self.current]
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advance the cursor, wrapping after the last route.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &Path {
        self.current = (self.current + 1) % self.paths.len();
        self.current()
    }

    /// Move the cursor back, wrapping before the first route.
    pub fn prev(&mut self) -> &Path {
        self.current = (self.current + self.paths.len() - 1) % self.paths.len();
        self.current()
    }

    /// Point the cursor at route `i`.
    pub fn select(&mut self, i: usize) -> Option<&Path> {
        if i >= self.paths.len() {
            return None;
        }
        self.current = i;
        Some(self.current())
    }
}

/// A pather that additionally treats one cell as blocked, leaving the
/// wrapped pather untouched.
struct Excluding<'a, P> {
    inner: &'a P,
    excluded: Pos,
}

impl<P: Pather> Pather for Excluding<'_, P> {
    fn bounds(&self) -> Bounds {
        self.inner.bounds()
    }

    fn is_passable(&self, p: Pos) -> bool {
        p != self.excluded && self.inner.is_passable(p)
    }

    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        self.inner.estimate(from, to)
    }
}

/// Collect routes with as many cells as `canonical`, starting with it.
///
/// For each interior cell of `canonical`, in path order, the cell is
/// excluded and a batch search is run between the same endpoints; a result
/// of the same length that is not yet in the set is added. Stops once the
/// set holds [`MAX_PATHS`] routes.
pub fn alternates<P: Pather>(pather: &P, canonical: &Path) -> Result<PathSet, SearchError> {
    let mut set = PathSet::new(canonical.clone());
    let (Some(start), Some(goal)) = (canonical.start(), canonical.goal()) else {
        return Ok(set);
    };

    let mut search = Search::new(pather.bounds());
    for &cell in canonical.interior() {
        if set.is_full() {
            break;
        }
        let probe = Excluding {
            inner: pather,
            excluded: cell,
        };
        if let Some(path) = search.solve(&probe, start, goal)? {
            if set.try_push(path) {
                log::trace!("excluding {cell} revealed route #{}", set.len());
            }
        }
    }

    log::debug!(
        "{} route(s) of {} cells between {start} and {goal}",
        set.len(),
        set.path_len()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::solve;
    use pathstep_core::Grid;

    fn cells(v: &[(i32, i32)]) -> Vec<Pos> {
        v.iter().map(|&(r, c)| Pos::new(r, c)).collect()
    }

    fn routes(grid: &Grid, start: Pos, goal: Pos) -> PathSet {
        let canonical = solve(grid, start, goal).unwrap().unwrap();
        alternates(grid, &canonical).unwrap()
    }

    fn assert_sound(set: &PathSet) {
        assert!(set.len() <= MAX_PATHS);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.len(), set.path_len());
            assert!(p.is_connected());
            assert_eq!(p.start(), set.canonical().start());
            assert_eq!(p.goal(), set.canonical().goal());
            for q in set.iter().skip(i + 1) {
                assert_ne!(p, q);
            }
        }
    }

    #[test]
    fn open_square_has_several_staircases() {
        let grid = Grid::new(5, 5).unwrap();
        let set = routes(&grid, Pos::new(0, 0), Pos::new(4, 4));
        assert_sound(&set);
        assert_eq!(set.path_len(), 9);
        assert_eq!(set.len(), 8);
        assert_eq!(
            set.get(1).unwrap().cells(),
            &cells(&[
                (0, 0), (0, 1), (1, 1), (2, 1), (3, 1),
                (4, 1), (4, 2), (4, 3), (4, 4),
            ])[..]
        );
    }

    #[test]
    fn set_is_capped() {
        let grid = Grid::new(20, 20).unwrap();
        let set = routes(&grid, Pos::new(0, 0), Pos::new(19, 19));
        assert_sound(&set);
        assert_eq!(set.len(), MAX_PATHS);
    }

    #[test]
    fn adjacent_endpoints_have_no_alternates() {
        let grid = Grid::new(5, 5).unwrap();
        let set = routes(&grid, Pos::new(2, 2), Pos::new(2, 3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.path_len(), 2);
    }

    #[test]
    fn single_corridor_has_one_route() {
        let grid = Grid::parse(
            "
            .....
            ####.
            .....
            .####
            .....",
        )
        .unwrap();
        let set = routes(&grid, Pos::new(0, 0), Pos::new(4, 4));
        assert_eq!(set.len(), 1);
        assert_eq!(set.path_len(), 17);
    }

    #[test]
    fn maze_alternates() {
        let grid = Grid::parse(
            "
            ..#......
            ..#.###..
            ..#...#..
            ....#.#..
            ###.#....",
        )
        .unwrap();
        let set = routes(&grid, Pos::new(0, 0), Pos::new(0, 8));
        assert_sound(&set);
        assert_eq!(set.path_len(), 15);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn probing_leaves_grid_untouched() {
        let grid = Grid::new(6, 6).unwrap();
        let before = grid.clone();
        let _ = routes(&grid, Pos::new(0, 0), Pos::new(5, 5));
        assert_eq!(grid, before);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let grid = Grid::new(5, 5).unwrap();
        let mut set = routes(&grid, Pos::new(0, 0), Pos::new(4, 4));
        let n = set.len();
        assert_eq!(set.current_index(), 0);
        set.prev();
        assert_eq!(set.current_index(), n - 1);
        set.next();
        assert_eq!(set.current(), set.canonical());
        assert!(set.select(n).is_none());
        assert_eq!(set.select(2).map(Path::len), Some(9));
        assert_eq!(set.current_index(), 2);
    }

    #[test]
    fn try_push_rejects_duplicates_and_other_lengths() {
        let canonical = Path::from_cells(cells(&[(0, 0), (0, 1), (1, 1)])).unwrap();
        let mut set = PathSet::new(canonical.clone());
        assert!(!set.try_push(canonical));
        assert!(!set.try_push(Path::from_cells(cells(&[(0, 0), (1, 0)])).unwrap()));
        assert!(set.try_push(Path::from_cells(cells(&[(0, 0), (1, 0), (1, 1)])).unwrap()));
        assert_eq!(set.len(), 2);
    }
}
