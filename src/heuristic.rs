use core::fmt;
use std::str::FromStr;

use crate::cell::Cell;

/// Estimate of the remaining cost from `cell` to `goal` used to order the A* frontier.
///
/// A* only returns optimal paths if the estimate never exceeds the true remaining cost. This is
/// not checked: [Manhattan] overestimates on 8-connected grids whenever a diagonal shortcut is
/// available, so strict optimality with it holds only where such shortcuts do not beat the
/// Manhattan bound. [Chebyshev] is admissible whenever every step costs at least 1.
pub trait Heuristic {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32;
}

/// `|Δrow| + |Δcol|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        cell.manhattan_distance(&goal) as u32
    }
}

/// `max(|Δrow|, |Δcol|)`, the exact distance on an open grid with unit costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        cell.chebyshev_distance(&goal) as u32
    }
}

/// Turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _: Cell, _: Cell) -> u32 {
        0
    }
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> u32,
{
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        self(cell, goal)
    }
}

/// Named choice among the built-in heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Chebyshev,
    Zero,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, cell: Cell, goal: Cell) -> u32 {
        match self {
            HeuristicKind::Manhattan => Manhattan.estimate(cell, goal),
            HeuristicKind::Chebyshev => Chebyshev.estimate(cell, goal),
            HeuristicKind::Zero => ZeroHeuristic.estimate(cell, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeuristicKind::Manhattan => write!(f, "manhattan"),
            HeuristicKind::Chebyshev => write!(f, "chebyshev"),
            HeuristicKind::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<HeuristicKind, String> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "chebyshev" => Ok(HeuristicKind::Chebyshev),
            "zero" | "none" => Ok(HeuristicKind::Zero),
            other => Err(format!("unknown heuristic '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates() {
        let a = Cell::new(1, 1);
        let b = Cell::new(4, 3);
        assert_eq!(Manhattan.estimate(a, b), 5);
        assert_eq!(Chebyshev.estimate(a, b), 3);
        assert_eq!(ZeroHeuristic.estimate(a, b), 0);
        assert_eq!(HeuristicKind::default().estimate(a, b), 5);
        let doubled = |c: Cell, g: Cell| 2 * c.manhattan_distance(&g) as u32;
        assert_eq!(doubled.estimate(a, b), 10);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("Chebyshev".parse::<HeuristicKind>(), Ok(HeuristicKind::Chebyshev));
        assert!("euclid".parse::<HeuristicKind>().is_err());
    }
}
