use std::time::Instant;

use log::debug;

use crate::cell::Cell;
use crate::error::SearchError;
use crate::grid::GridMap;
use crate::problem::SearchProblem;
use crate::report::{SearchReport, SearchResult};
use crate::terrain::TerrainCostTable;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod ucs;

/// A search strategy over a [SearchProblem].
///
/// Implementors only provide [solve](Self::solve); endpoint validation, timing and statistics
/// come from the provided methods.
pub trait GridSolver {
    /// Short lowercase name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Runs the search to completion. The result's path is empty if the goal cannot be reached,
    /// in which case the trace holds every cell the strategy finalized.
    fn solve(&self, problem: &SearchProblem) -> SearchResult;

    /// Solves an already validated problem, measuring the wall time of the call.
    fn report(&self, problem: &SearchProblem) -> SearchReport {
        debug!(
            "{} search from {} to {}",
            self.name(),
            problem.start(),
            problem.goal()
        );
        let started = Instant::now();
        let result = self.solve(problem);
        let elapsed = started.elapsed();
        let report = SearchReport::new(self.name(), result, problem, elapsed);
        debug!("{}", report);
        report
    }

    /// Validates the endpoints, then searches from `start` to `goal`.
    fn search(
        &self,
        grid: &GridMap,
        costs: &TerrainCostTable,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchReport, SearchError> {
        let problem = SearchProblem::new(grid, costs, start, goal)?;
        Ok(self.report(&problem))
    }
}
