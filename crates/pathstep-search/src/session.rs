//! [`Session`]: the context a driver owns while editing and solving a grid.
//!
//! The session holds the grid, the two endpoints, at most one in-flight
//! [`Search`] and the last [`Solution`]. Every edit that could change the
//! answer discards both the run and the solution.

use pathstep_core::{Grid, GridError, Pos};

use crate::alternates::{PathSet, alternates};
use crate::engine::{Search, Status, Step};
use crate::error::{EndpointError, SearchError};
use crate::path::Path;

/// The result of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    paths: PathSet,
    closed: usize,
}

impl Solution {
    /// Equal-length routes, canonical first.
    #[inline]
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Mutable access, for moving the route cursor.
    #[inline]
    pub fn paths_mut(&mut self) -> &mut PathSet {
        &mut self.paths
    }

    /// The route currently selected.
    #[inline]
    pub fn path(&self) -> &Path {
        self.paths.current()
    }

    /// Cells closed by the run, start and goal included.
    #[inline]
    pub fn closed(&self) -> usize {
        self.closed
    }
}

/// Grid, endpoints and search lifecycle in one place.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    start: Option<Pos>,
    goal: Option<Pos>,
    search: Option<Search>,
    visited: Vec<Pos>,
    solution: Option<Solution>,
}

impl Session {
    /// A session on an all-open `rows × cols` grid with no endpoints.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(rows, cols)?))
    }

    /// A session on an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            goal: None,
            search: None,
            visited: Vec::new(),
            solution: None,
        }
    }

    /// Rebuild the grid at a new size.
    ///
    /// The dimensions are validated first; on error the current grid and
    /// state are left as they were. On success all walls, both endpoints,
    /// any run and any solution are discarded.
    pub fn configure(&mut self, rows: i32, cols: i32) -> Result<&Grid, GridError> {
        let grid = Grid::new(rows, cols)?;
        log::debug!("grid rebuilt at {}", grid.bounds());
        self.grid = grid;
        self.start = None;
        self.goal = None;
        self.invalidate();
        Ok(&self.grid)
    }

    /// Place the start cell, opening it if it was blocked.
    pub fn set_start(&mut self, p: Pos) -> Result<(), SearchError> {
        self.check_endpoint(p, self.goal)?;
        self.grid.set_blocked(p, false);
        self.start = Some(p);
        self.invalidate();
        Ok(())
    }

    /// Place the goal cell, opening it if it was blocked.
    pub fn set_goal(&mut self, p: Pos) -> Result<(), SearchError> {
        self.check_endpoint(p, self.start)?;
        self.grid.set_blocked(p, false);
        self.goal = Some(p);
        self.invalidate();
        Ok(())
    }

    /// Flip the wall at `p` and return its new state.
    ///
    /// Rejected (`None`) on an endpoint or outside the grid. An accepted
    /// edit cancels the current run and clears the solution.
    pub fn toggle_blocked(&mut self, p: Pos) -> Option<bool> {
        if self.is_endpoint(p) {
            log::debug!("refusing to wall endpoint {p}");
            return None;
        }
        let blocked = self.grid.toggle(p)?;
        self.invalidate();
        Some(blocked)
    }

    /// Set the wall at `p` to `blocked`, for paint strokes. Same rules as
    /// [`toggle_blocked`](Self::toggle_blocked); returns whether anything
    /// changed.
    pub fn paint_blocked(&mut self, p: Pos, blocked: bool) -> bool {
        if self.is_endpoint(p) || self.grid.is_blocked(p) != Some(!blocked) {
            return false;
        }
        self.grid.set_blocked(p, blocked);
        self.invalidate();
        true
    }

    /// Start a new run between the current endpoints, replacing any run in
    /// flight and clearing the previous solution.
    pub fn begin_search(&mut self) -> Result<(), SearchError> {
        let start = self.start.ok_or(EndpointError::MissingStart)?;
        let goal = self.goal.ok_or(EndpointError::MissingGoal)?;
        self.invalidate();

        let mut search = Search::new(self.grid.bounds());
        search.init(&self.grid, start, goal)?;
        self.search = Some(search);
        Ok(())
    }

    /// Advance the in-flight run by one expansion.
    ///
    /// On [`Step::Found`] the alternate routes are collected before
    /// returning and the run is retired; on [`Step::Exhausted`] the run is
    /// discarded. Without a run this reports
    /// [`SearchError::NotRunning`].
    pub fn step(&mut self) -> Result<Step, SearchError> {
        let Some(search) = self.search.as_mut() else {
            return Err(SearchError::NotRunning(Status::Idle));
        };
        let step = search.step(&self.grid)?;
        match &step {
            Step::Seeded => {}
            Step::Visited(p) => self.visited.push(*p),
            Step::Found { path, closed } => {
                let paths = alternates(&self.grid, path)?;
                self.solution = Some(Solution {
                    paths,
                    closed: *closed,
                });
                self.search = None;
            }
            Step::Exhausted => {
                self.search = None;
            }
        }
        Ok(step)
    }

    /// Drop the run and solution but keep walls and endpoints.
    pub fn clear_solution(&mut self) {
        self.invalidate();
    }

    /// Drop everything: walls, endpoints, run and solution.
    pub fn clear_all(&mut self) {
        self.grid.clear();
        self.start = None;
        self.goal = None;
        self.invalidate();
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Pos> {
        self.goal
    }

    /// Whether a run is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.search.as_ref().is_some_and(Search::is_running)
    }

    /// The in-flight run, if any.
    #[inline]
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// Cells revealed by the current or last run, in visiting order.
    #[inline]
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    #[inline]
    pub fn solution_mut(&mut self) -> Option<&mut Solution> {
        self.solution.as_mut()
    }

    fn is_endpoint(&self, p: Pos) -> bool {
        self.start == Some(p) || self.goal == Some(p)
    }

    fn check_endpoint(&self, p: Pos, other: Option<Pos>) -> Result<(), EndpointError> {
        if !self.grid.contains(p) {
            return Err(EndpointError::OutOfBounds(p));
        }
        if other == Some(p) {
            return Err(EndpointError::Same(p));
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        if self.is_running() {
            log::debug!("cancelling in-flight search");
        }
        self.search = None;
        self.visited.clear();
        self.solution = None;
    }
}
