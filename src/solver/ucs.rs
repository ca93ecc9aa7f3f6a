use crate::frontier::best_first_search;
use crate::problem::SearchProblem;
use crate::report::SearchResult;
use crate::solver::GridSolver;

/// Uniform-cost search (Dijkstra): the frontier is ordered by accumulated terrain cost, so the
/// path found is the cheapest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct UcsSolver;

impl GridSolver for UcsSolver {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn solve(&self, problem: &SearchProblem) -> SearchResult {
        let (path, explored) = best_first_search(
            &problem.start(),
            |node| {
                problem
                    .successors(node)
                    .into_iter()
                    .map(|(n, c)| (n, c as u64))
            },
            |_| 0,
            |node| problem.is_goal(node),
        );
        SearchResult::new(path, explored)
    }
}
