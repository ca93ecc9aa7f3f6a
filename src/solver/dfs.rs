use fxhash::FxHashSet;
use log::debug;

use crate::cell::Cell;
use crate::frontier::{reverse_path, FxIndexMap, NO_PARENT};
use crate::problem::SearchProblem;
use crate::report::SearchResult;
use crate::solver::GridSolver;

/// Depth-first search with an explicit stack. The path returned is the first one found and
/// usually not the shortest.
///
/// Successors are pushed in reverse so that they are popped in the clockwise order N, NE, E, ...
/// of [SearchProblem::successors]. With `max_depth` set, cells that lie `max_depth` moves from
/// the start along the current branch are still finalized and goal-tested but not expanded.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver {
    pub max_depth: Option<usize>,
}

impl DfsSolver {
    pub fn new() -> DfsSolver {
        DfsSolver { max_depth: None }
    }
    pub fn with_max_depth(max_depth: usize) -> DfsSolver {
        DfsSolver {
            max_depth: Some(max_depth),
        }
    }
}

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        match self.max_depth {
            Some(_) => "dfs (depth-limited)",
            None => "dfs",
        }
    }

    fn solve(&self, problem: &SearchProblem) -> SearchResult {
        // A cell may sit on the stack several times. The latest push is popped first, so its
        // parent overwrites earlier ones for as long as the cell is not finalized.
        let mut parents: FxIndexMap<Cell, usize> = FxIndexMap::default();
        parents.insert(problem.start(), NO_PARENT);
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        let mut finalized: FxHashSet<Cell> = FxHashSet::default();
        let mut explored = Vec::new();

        while let Some((index, depth)) = stack.pop() {
            let (&node, _) = parents
                .get_index(index)
                .expect("stack entries index the parent table");
            if !finalized.insert(node) {
                continue;
            }
            explored.push(node);
            if problem.is_goal(&node) {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchResult::new(path, explored);
            }
            if self.max_depth.is_some_and(|max| depth >= max) {
                debug!("Not expanding {} at depth {}", node, depth);
                continue;
            }
            for (successor, _) in problem.successors(&node).into_iter().rev() {
                if finalized.contains(&successor) {
                    continue;
                }
                let (n, _) = parents.insert_full(successor, index);
                stack.push((n, depth + 1));
            }
        }
        SearchResult::new(Vec::new(), explored)
    }
}
