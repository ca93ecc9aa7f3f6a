use core::fmt;

use crate::cell::Cell;

/// Which end of the query an [SearchError::InvalidEndpoint] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "is outside the grid"),
            EndpointFault::Blocked => write!(f, "is not traversable"),
        }
    }
}

/// Errors reported before a search runs. Failing to reach the goal is not one of them: that is
/// an empty path in an otherwise normal [SearchResult](crate::SearchResult).
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{role} cell {cell} {reason}")]
    InvalidEndpoint {
        role: Endpoint,
        cell: Cell,
        reason: EndpointFault,
    },

    #[error("terrain '{label}' cannot cost {cost}, step costs start at 1")]
    InvalidTerrainCost { label: String, cost: u32 },

    #[error("unknown search strategy '{0}' (expected bfs, dfs, ucs or astar)")]
    UnknownStrategy(String),

    #[error("malformed map: {0}")]
    ParseMap(String),
}
