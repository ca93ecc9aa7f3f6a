use std::collections::VecDeque;

use indexmap::map::Entry::Vacant;

use crate::cell::Cell;
use crate::frontier::{reverse_path, FxIndexMap, NO_PARENT};
use crate::problem::SearchProblem;
use crate::report::SearchResult;
use crate::solver::GridSolver;

/// Breadth-first search. Step costs are ignored, so the path found has the fewest moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self, problem: &SearchProblem) -> SearchResult {
        // A cell enters the parent table when first discovered. As the queue is FIFO, that first
        // entry is also the first to be popped, so later discoveries can be dropped right away.
        let mut parents: FxIndexMap<Cell, usize> = FxIndexMap::default();
        parents.insert(problem.start(), NO_PARENT);
        let mut queue = VecDeque::from([0]);
        let mut explored = Vec::new();

        while let Some(index) = queue.pop_front() {
            let (&node, _) = parents
                .get_index(index)
                .expect("queue entries index the parent table");
            explored.push(node);
            if problem.is_goal(&node) {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchResult::new(path, explored);
            }
            for (successor, _) in problem.successors(&node) {
                if let Vacant(e) = parents.entry(successor) {
                    queue.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        SearchResult::new(Vec::new(), explored)
    }
}
