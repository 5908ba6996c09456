//! The step-resumable A* engine.
//!
//! [`Search`] is an explicit state machine: every call to
//! [`step`](Search::step) closes exactly one cell and hands control back to
//! the caller, so a driver can reveal the exploration one tick at a time.

use std::fmt;

use pathstep_core::{Bounds, Pos};

use crate::error::{EndpointError, SearchError};
use crate::path::{Path, reconstruct};
use crate::state::{SearchState, UNREACHABLE};
use crate::traits::Pather;

/// Lifecycle of a [`Search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Not initialised yet.
    Idle,
    Running,
    /// The goal entered the closed set.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Found => "found",
            Self::Exhausted => "exhausted",
        })
    }
}

/// What a single [`Search::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The start cell was closed. Nothing to reveal.
    Seeded,
    /// A cell other than start or goal entered the closed set.
    Visited(Pos),
    /// The goal was reached. `closed` counts every closed cell, start and
    /// goal included.
    Found { path: Path, closed: usize },
    /// No path exists.
    Exhausted,
}

/// Incremental A* over a [`Pather`].
///
/// The pather is passed to every call rather than stored, so the caller keeps
/// ownership of its grid between steps. It must not change while the search
/// is running.
#[derive(Clone, Debug)]
pub struct Search {
    state: SearchState,
    start: Pos,
    goal: Pos,
    status: Status,
    nbuf: Vec<Pos>,
}

impl Search {
    /// Create an idle search sized for `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            state: SearchState::new(bounds),
            start: Pos::ZERO,
            goal: Pos::ZERO,
            status: Status::Idle,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Reset all tables and seed the frontier with `start`.
    ///
    /// Fails with [`SearchError::InvalidEndpoints`] when the endpoints are
    /// equal, outside the pather's bounds, or not passable. On failure the
    /// search is left idle.
    pub fn init<P: Pather>(&mut self, pather: &P, start: Pos, goal: Pos) -> Result<(), SearchError> {
        self.status = Status::Idle;
        validate_endpoints(pather, start, goal)?;

        let bounds = pather.bounds();
        self.state.reset(bounds);
        self.start = start;
        self.goal = goal;

        let si = bounds
            .index(start)
            .ok_or(EndpointError::OutOfBounds(start))?;
        let h = pather.estimate(start, goal);
        let n = self.state.node_mut(si);
        n.g = 0;
        n.f = h;
        self.state.push_open(si);

        self.status = Status::Running;
        log::debug!("search {start} -> {goal} started on {bounds} grid");
        Ok(())
    }

    /// Close one cell and expand its neighbours.
    ///
    /// Calling this outside [`Status::Running`] is a programming error and
    /// reported as [`SearchError::NotRunning`].
    pub fn step<P: Pather>(&mut self, pather: &P) -> Result<Step, SearchError> {
        if self.status != Status::Running {
            return Err(SearchError::NotRunning(self.status));
        }

        let Some(ci) = self.state.pop_best() else {
            self.status = Status::Exhausted;
            log::debug!(
                "search {} -> {} exhausted after closing {} cells",
                self.start,
                self.goal,
                self.state.closed_count()
            );
            return Ok(Step::Exhausted);
        };

        self.state.close(ci);
        let bounds = self.state.bounds;
        let current = bounds.pos(ci);

        if current == self.goal {
            self.status = Status::Found;
            let path = reconstruct(&self.state, self.goal);
            let closed = self.state.closed_count();
            log::debug!(
                "search {} -> {} found a {}-cell path after closing {closed} cells",
                self.start,
                self.goal,
                path.len()
            );
            return Ok(Step::Found { path, closed });
        }

        let tentative_g = self.state.node(ci).g + 1;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            let n = self.state.node(ni);
            if n.closed || tentative_g >= n.g {
                continue;
            }
            let f = tentative_g + pather.estimate(np, self.goal);
            let n = self.state.node_mut(ni);
            n.parent = ci;
            n.g = tentative_g;
            n.f = f;
            self.state.push_open(ni);
        }
        self.nbuf = nbuf;

        log::trace!("closed {current}, frontier {}", self.state.open_len());
        if current == self.start {
            Ok(Step::Seeded)
        } else {
            Ok(Step::Visited(current))
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Number of cells in the closed set.
    #[inline]
    pub fn closed_count(&self) -> usize {
        self.state.closed_count()
    }

    /// Number of cells in the frontier.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.state.open_len()
    }

    /// Frontier cells in insertion order.
    pub fn frontier(&self) -> impl Iterator<Item = Pos> + '_ {
        self.state.open_cells()
    }

    /// Best known distance from start, or `None` for +∞.
    pub fn g_score(&self, p: Pos) -> Option<i32> {
        self.score(p, |n| n.g)
    }

    /// `g + estimate`, or `None` for +∞.
    pub fn f_score(&self, p: Pos) -> Option<i32> {
        self.score(p, |n| n.f)
    }

    /// Whether `p` is in the closed set.
    pub fn is_closed(&self, p: Pos) -> bool {
        self.state
            .bounds
            .index(p)
            .is_some_and(|i| self.state.node(i).closed)
    }

    /// The route to the goal once the search is [`Status::Found`].
    pub fn path(&self) -> Option<Path> {
        (self.status == Status::Found).then(|| reconstruct(&self.state, self.goal))
    }

    fn score(&self, p: Pos, pick: impl Fn(&crate::state::Node) -> i32) -> Option<i32> {
        if self.status == Status::Idle {
            return None;
        }
        let i = self.state.bounds.index(p)?;
        let v = pick(&self.state.node(i));
        (v != UNREACHABLE).then_some(v)
    }
}

fn validate_endpoints<P: Pather>(pather: &P, start: Pos, goal: Pos) -> Result<(), EndpointError> {
    if start == goal {
        return Err(EndpointError::Same(start));
    }
    let bounds = pather.bounds();
    for p in [start, goal] {
        if !bounds.contains(p) {
            return Err(EndpointError::OutOfBounds(p));
        }
        if !pather.is_passable(p) {
            return Err(EndpointError::Blocked(p));
        }
    }
    Ok(())
}
