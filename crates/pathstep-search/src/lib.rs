//! Step-resumable A* search on grids.
//!
//! This crate drives a shortest-path search one expansion at a time so the
//! exploration can be shown as it happens, then samples other routes of the
//! same length:
//!
//! - **Stepwise A\*** with a fixed tie-break and expansion order ([`Search::step`])
//! - **Batch search** on the same engine ([`Search::solve`], [`solve`])
//! - **Alternate routes** of equal length ([`alternates`], [`PathSet`])
//! - **Session** state for a driver: grid, endpoints, run, solution ([`Session`])
//!
//! The engine reaches the grid through the [`Pather`] trait; [`Grid`]
//! implements it with 4-connected unit-cost moves and the Manhattan
//! heuristic.
//!
//! [`Grid`]: pathstep_core::Grid

mod alternates;
mod batch;
mod distance;
mod engine;
mod error;
mod path;
mod session;
mod state;
mod traits;

#[cfg(test)]
mod properties;

pub use alternates::{MAX_PATHS, PathSet, alternates};
pub use batch::solve;
pub use distance::manhattan;
pub use engine::{Search, Status, Step};
pub use error::{EndpointError, SearchError};
pub use path::Path;
pub use session::{Session, Solution};
pub use state::UNREACHABLE;
pub use traits::Pather;
