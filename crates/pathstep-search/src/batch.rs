//! Run-to-completion search on top of the stepwise engine.

use pathstep_core::Pos;

use crate::engine::{Search, Step};
use crate::error::SearchError;
use crate::path::Path;
use crate::traits::Pather;

impl Search {
    /// Initialise and step until the search terminates, without reporting
    /// intermediate progress.
    ///
    /// Returns the same path the stepwise engine would find, or `None` if the
    /// goal is unreachable. Reuses this search's tables, so repeated probes
    /// allocate nothing once the arena is large enough.
    pub fn solve<P: Pather>(
        &mut self,
        pather: &P,
        start: Pos,
        goal: Pos,
    ) -> Result<Option<Path>, SearchError> {
        self.init(pather, start, goal)?;
        loop {
            match self.step(pather)? {
                Step::Seeded | Step::Visited(_) => {}
                Step::Found { path, .. } => return Ok(Some(path)),
                Step::Exhausted => return Ok(None),
            }
        }
    }
}

/// One-shot shortest path from `start` to `goal`.
pub fn solve<P: Pather>(pather: &P, start: Pos, goal: Pos) -> Result<Option<Path>, SearchError> {
    Search::new(pather.bounds()).solve(pather, start, goal)
}
