use log::warn;
use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::error::{Endpoint, EndpointFault, SearchError};
use crate::grid::GridMap;
use crate::terrain::TerrainCostTable;
use crate::N_SMALLVEC_SIZE;

pub type Successors = SmallVec<[(Cell, u32); N_SMALLVEC_SIZE]>;

/// A single start-to-goal query over a borrowed [GridMap] and [TerrainCostTable]. The borrows
/// keep both inputs frozen for as long as the problem (and any search over it) lives.
#[derive(Clone, Copy, Debug)]
pub struct SearchProblem<'a> {
    grid: &'a GridMap,
    costs: &'a TerrainCostTable,
    start: Cell,
    goal: Cell,
}

impl<'a> SearchProblem<'a> {
    /// Builds the problem after checking that both endpoints are inside the grid and traversable.
    pub fn new(
        grid: &'a GridMap,
        costs: &'a TerrainCostTable,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchProblem<'a>, SearchError> {
        for (role, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            let reason = if !grid.in_bounds(cell) {
                EndpointFault::OutOfBounds
            } else if !grid.is_traversable(cell, costs) {
                EndpointFault::Blocked
            } else {
                continue;
            };
            warn!("Rejecting {} cell {}: {}", role, cell, reason);
            return Err(SearchError::InvalidEndpoint { role, cell, reason });
        }
        Ok(SearchProblem {
            grid,
            costs,
            start,
            goal,
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn goal(&self) -> Cell {
        self.goal
    }
    pub fn grid(&self) -> &'a GridMap {
        self.grid
    }
    pub fn costs(&self) -> &'a TerrainCostTable {
        self.costs
    }
    pub fn is_goal(&self, cell: &Cell) -> bool {
        *cell == self.goal
    }
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.grid.is_traversable(cell, self.costs)
    }
    /// Cost of entering `cell`; the move that reaches it, straight or diagonal, does not matter.
    pub fn step_cost(&self, cell: Cell) -> u32 {
        self.grid.terrain_cost(cell, self.costs)
    }

    /// The traversable neighbours of `cell` in the fixed clockwise order N, NE, E, SE, S, SW, W,
    /// NW, each paired with the cost of entering it.
    pub fn successors(&self, cell: &Cell) -> Successors {
        Direction::ALL
            .iter()
            .map(|&d| cell.step(d))
            .filter(|&n| self.is_traversable(n))
            .map(|n| (n, self.step_cost(n)))
            .collect::<Successors>()
    }
}
