//! # grid_search
//!
//! Path search on weighted, 8-connected grids. A [GridMap] holds walls and terrain labels, a
//! [TerrainCostTable] prices each label, and one of four interchangeable solvers finds a path
//! between two cells:
//!
//! - [BfsSolver]: breadth-first, fewest moves,
//! - [DfsSolver]: depth-first, optionally depth-limited, no optimality,
//! - [UcsSolver]: uniform-cost, cheapest path,
//! - [AstarSolver]: A* with a pluggable [Heuristic], cheapest path when the heuristic is
//!   admissible.
//!
//! Entering a cell costs the price of its terrain (1 when unlabelled), whether the move is
//! straight or diagonal. Besides the path every solver records the order in which it finalized
//! cells, which is what a visualisation replays. Not finding a path is a normal outcome: the
//! path is empty and the trace holds everything that was explored.
//!
//! ```
//! use grid_search::{search, Cell, GridMap, SearchOptions, Strategy, TerrainCostTable};
//!
//! let grid: GridMap = "....\n.##.\n....".parse().unwrap();
//! let costs = TerrainCostTable::palette();
//! let report = search(
//!     Strategy::Astar,
//!     &grid,
//!     &costs,
//!     Cell::new(0, 0),
//!     Cell::new(2, 3),
//!     &SearchOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(report.path().first(), Some(&Cell::new(0, 0)));
//! assert_eq!(report.path().last(), Some(&Cell::new(2, 3)));
//! ```
pub mod cell;
pub mod error;
mod frontier;
pub mod grid;
pub mod heuristic;
pub mod problem;
pub mod report;
pub mod solver;
pub mod terrain;

use core::fmt;
use std::str::FromStr;

pub use cell::{Cell, Direction};
pub use error::{Endpoint, EndpointFault, SearchError};
pub use grid::GridMap;
pub use heuristic::{Chebyshev, Heuristic, HeuristicKind, Manhattan, ZeroHeuristic};
pub use problem::SearchProblem;
pub use report::{SearchReport, SearchResult, SearchStats};
pub use solver::{astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, ucs::UcsSolver, GridSolver};
pub use terrain::{TerrainCostTable, TerrainLabel};

/// Cost of entering a cell without terrain, and the lowest cost a terrain may have.
pub const DEFAULT_TERRAIN_COST: u32 = 1;
/// Terrain costing this much or more cannot be entered.
pub const IMPASSABLE_COST: u32 = 999;
/// Depth bound used by [SearchOptions::depth_limited].
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// A cell has at most 8 successors, which then fit on the stack.
pub const N_SMALLVEC_SIZE: usize = 8;

/// The search strategies selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Astar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs, Strategy::Astar];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Ucs => write!(f, "ucs"),
            Strategy::Astar => write!(f, "astar"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Strategy, SearchError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "ucs" | "dijkstra" => Ok(Strategy::Ucs),
            "astar" | "a*" => Ok(Strategy::Astar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Optional knobs of [search]. `heuristic` and `heuristic_factor` only affect A*, `max_depth`
/// only affects DFS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    pub heuristic: HeuristicKind,
    pub heuristic_factor: f32,
    pub max_depth: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            heuristic: HeuristicKind::Manhattan,
            heuristic_factor: 1.0,
            max_depth: None,
        }
    }
}

impl SearchOptions {
    /// Default options with DFS bounded to [DEFAULT_MAX_DEPTH].
    pub fn depth_limited() -> SearchOptions {
        SearchOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            ..SearchOptions::default()
        }
    }
}

/// Runs `strategy` from `start` to `goal`. Fails only if an endpoint is outside the grid or not
/// traversable.
pub fn search(
    strategy: Strategy,
    grid: &GridMap,
    costs: &TerrainCostTable,
    start: Cell,
    goal: Cell,
    options: &SearchOptions,
) -> Result<SearchReport, SearchError> {
    match strategy {
        Strategy::Bfs => BfsSolver.search(grid, costs, start, goal),
        Strategy::Dfs => DfsSolver {
            max_depth: options.max_depth,
        }
        .search(grid, costs, start, goal),
        Strategy::Ucs => UcsSolver.search(grid, costs, start, goal),
        Strategy::Astar => AstarSolver {
            heuristic: options.heuristic,
            heuristic_factor: options.heuristic_factor,
        }
        .search(grid, costs, start, goal),
    }
}
