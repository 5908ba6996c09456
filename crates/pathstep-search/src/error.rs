use std::fmt;

use pathstep_core::Pos;

use crate::engine::Status;

/// Why a pair of endpoints cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    MissingStart,
    MissingGoal,
    /// Start and goal are the same cell.
    Same(Pos),
    OutOfBounds(Pos),
    Blocked(Pos),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell selected"),
            Self::MissingGoal => f.write_str("no goal cell selected"),
            Self::Same(p) => write!(f, "start and goal are both {p}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::Blocked(p) => write!(f, "endpoint {p} is blocked"),
        }
    }
}

impl std::error::Error for EndpointError {}

/// Errors reported by the search engine and the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoints(EndpointError),
    /// `step` was called while no run is in progress.
    NotRunning(Status),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(e) => write!(f, "invalid endpoints: {e}"),
            Self::NotRunning(status) => write!(f, "search is not running (status: {status})"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EndpointError> for SearchError {
    fn from(e: EndpointError) -> Self {
        Self::InvalidEndpoints(e)
    }
}
