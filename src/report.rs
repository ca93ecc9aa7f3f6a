use core::fmt;
use std::time::Duration;

use crate::cell::Cell;
use crate::problem::SearchProblem;

/// What a solver hands back: the path from start to goal inclusive (empty when the goal was not
/// reached) and every finalized cell in the order it was finalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Vec<Cell>,
    pub explored: Vec<Cell>,
}

impl SearchResult {
    pub fn new(path: Vec<Cell>, explored: Vec<Cell>) -> SearchResult {
        SearchResult { path, explored }
    }
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of cells on the path, both endpoints included.
    pub path_length: usize,
    /// Sum of the cost of every path cell after the start.
    pub total_cost: u64,
    pub explored_count: usize,
    pub elapsed: Duration,
}

/// A [SearchResult] together with the statistics shown next to the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: &'static str,
    pub result: SearchResult,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn new(
        strategy: &'static str,
        result: SearchResult,
        problem: &SearchProblem,
        elapsed: Duration,
    ) -> SearchReport {
        let stats = SearchStats {
            path_length: result.path.len(),
            total_cost: path_cost(problem, &result.path),
            explored_count: result.explored.len(),
            elapsed,
        };
        SearchReport {
            strategy,
            result,
            stats,
        }
    }
    pub fn found(&self) -> bool {
        self.result.found()
    }
    pub fn path(&self) -> &[Cell] {
        &self.result.path
    }
    pub fn explored(&self) -> &[Cell] {
        &self.result.explored
    }
}

/// Cost of walking `path`: the start is free, every later cell costs its terrain cost. An empty
/// path costs 0.
pub fn path_cost(problem: &SearchProblem, path: &[Cell]) -> u64 {
    path.iter()
        .skip(1)
        .map(|&c| problem.step_cost(c) as u64)
        .sum()
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.found() {
            write!(
                f,
                "{}: path of {} cells, cost {}, {} nodes explored in {:.2} ms",
                self.strategy,
                self.stats.path_length,
                self.stats.total_cost,
                self.stats.explored_count,
                self.stats.elapsed.as_secs_f64() * 1000.0
            )
        } else {
            write!(
                f,
                "{}: no path, {} nodes explored in {:.2} ms",
                self.strategy,
                self.stats.explored_count,
                self.stats.elapsed.as_secs_f64() * 1000.0
            )
        }
    }
}
