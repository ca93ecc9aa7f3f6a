use crate::frontier::best_first_search;
use crate::heuristic::{Heuristic, Manhattan};
use crate::problem::SearchProblem;
use crate::report::SearchResult;
use crate::solver::GridSolver;

/// A* search ordering the frontier by accumulated cost plus a [Heuristic] estimate of the cost
/// still to go.
///
/// The estimate is multiplied by `heuristic_factor`. Raising the factor above 1 (weighted A*)
/// makes the search head for the goal more eagerly at the price of optimality.
#[derive(Clone, Debug)]
pub struct AstarSolver<H = Manhattan> {
    pub heuristic: H,
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic: Manhattan,
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl<H: Heuristic> AstarSolver<H> {
    pub fn with_heuristic(heuristic: H) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            heuristic_factor: 1.0,
        }
    }
}

impl<H: Heuristic> GridSolver for AstarSolver<H> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn solve(&self, problem: &SearchProblem) -> SearchResult {
        let goal = problem.goal();
        let (path, explored) = best_first_search(
            &problem.start(),
            |node| {
                problem
                    .successors(node)
                    .into_iter()
                    .map(|(n, c)| (n, c as u64))
            },
            |&node| {
                (self.heuristic.estimate(node, goal) as f32 * self.heuristic_factor) as u64
            },
            |node| problem.is_goal(node),
        );
        SearchResult::new(path, explored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::grid::GridMap;
    use crate::heuristic::{Chebyshev, ZeroHeuristic};
    use crate::solver::ucs::UcsSolver;
    use crate::terrain::TerrainCostTable;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = GridMap::new(1, 1);
        let table = TerrainCostTable::new();
        let start = Cell::new(0, 0);
        let report = AstarSolver::new().search(&grid, &table, start, start).unwrap();
        assert_eq!(report.path(), &[start]);
        assert_eq!(report.stats.total_cost, 0);
    }

    /// Asserts that the optimal solution around the centre wall is found.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  G|
        //  ___
        let mut grid = GridMap::new(3, 3);
        grid.set_wall(Cell::new(1, 1), true);
        let table = TerrainCostTable::new();
        let report = AstarSolver::new()
            .search(&grid, &table, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(report.stats.path_length, 4);
        assert_eq!(report.stats.total_cost, 3);
    }

    #[test]
    fn test_complex() {
        let mut grid = GridMap::new(10, 10);
        grid.set_rect_walls(Cell::new(1, 1), 1, 1, true);
        grid.set_rect_walls(Cell::new(0, 5), 1, 1, true);
        grid.set_rect_walls(Cell::new(5, 0), 1, 1, true);
        grid.set_rect_walls(Cell::new(8, 8), 1, 1, true);
        let table = TerrainCostTable::new();
        let report = AstarSolver::with_heuristic(Chebyshev)
            .search(&grid, &table, Cell::new(0, 0), Cell::new(7, 7))
            .unwrap();
        // (0,0) -> (7,7) needs 7 moves; the wall at (1,1) costs one more.
        assert_eq!(report.stats.total_cost, 8);
    }

    /// A* with a zero heuristic finalizes exactly the cells uniform-cost search does.
    #[test]
    fn zero_heuristic_matches_ucs() {
        let mut grid = GridMap::new(6, 6);
        grid.set_rect_walls(Cell::new(0, 3), 5, 1, true);
        grid.set_terrain(Cell::new(5, 3), "blue");
        let table = TerrainCostTable::palette();
        let (start, goal) = (Cell::new(0, 0), Cell::new(0, 5));
        let astar = AstarSolver::with_heuristic(ZeroHeuristic)
            .search(&grid, &table, start, goal)
            .unwrap();
        let ucs = UcsSolver.search(&grid, &table, start, goal).unwrap();
        assert_eq!(astar.result, ucs.result);
        assert_eq!(astar.stats.total_cost, 19);
    }

    /// On an open grid an exact heuristic explores far fewer cells than none at all.
    #[test]
    fn heuristic_prunes_exploration() {
        let grid = GridMap::new(20, 20);
        let table = TerrainCostTable::new();
        let (start, goal) = (Cell::new(0, 0), Cell::new(19, 10));
        let informed = AstarSolver::with_heuristic(Chebyshev)
            .search(&grid, &table, start, goal)
            .unwrap();
        let blind = UcsSolver.search(&grid, &table, start, goal).unwrap();
        assert_eq!(informed.stats.total_cost, blind.stats.total_cost);
        assert!(informed.stats.explored_count < blind.stats.explored_count);
    }

    #[test]
    fn closure_heuristic() {
        let grid = GridMap::new(4, 4);
        let table = TerrainCostTable::new();
        let solver = AstarSolver::with_heuristic(|c: Cell, g: Cell| c.chebyshev_distance(&g) as u32);
        let report = solver
            .search(&grid, &table, Cell::new(3, 0), Cell::new(0, 3))
            .unwrap();
        assert_eq!(report.stats.total_cost, 3);
    }
}
