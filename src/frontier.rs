//! Building blocks shared by the solvers: the priority entry ordering the UCS and A* frontiers,
//! and the parent table from which paths are read back.
use fxhash::{FxBuildHasher, FxHashMap};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the root of the parent table.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Entry of a priority frontier. `index` points into the parent table of the search, where the
/// node, its parent and its best-known cost live.
#[derive(Debug)]
pub(crate) struct SmallestCostHolder<K> {
    pub estimated_cost: K,
    pub cost: K,
    pub index: usize,
    pub seq: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of largest cost nodes first.
        // Remaining ties go to the entry pushed first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.seq.cmp(&self.seq),
                s => s,
            },
            s => s,
        }
    }
}

/// Follows parent indices from `start` back to the root and returns the nodes root first.
pub(crate) fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// An entry is stale when a cheaper way to its node has been recorded since it was pushed, or
/// when the node was already finalized at a cost no higher than the entry's.
pub(crate) fn is_stale<C: Ord>(cost: C, best_known: C, finalized: Option<&C>) -> bool {
    cost > best_known || finalized.is_some_and(|f| *f <= cost)
}

/// Best-first search over a priority frontier ordered by `cost + heuristic`, which is
/// uniform-cost search for a zero heuristic and A* otherwise.
///
/// Entries are never removed from the heap when a cheaper way to their node is found; they are
/// popped later and discarded by [is_stale]. A node is re-admitted whenever a strictly cheaper
/// cost than the best known one turns up. Every node that survives the staleness check is
/// finalized and appended to the returned trace before it is tested against `success`.
///
/// Returns the path (empty if the frontier ran dry) and the trace.
pub(crate) fn best_first_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> (Vec<N>, Vec<N>)
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut seq = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
        seq,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut finalized: FxHashMap<N, C> = FxHashMap::default();
    let mut explored: Vec<N> = Vec::new();

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, best_known)) = parents
                .get_index(index)
                .expect("frontier entries index the parent table");
            if is_stale(cost, best_known, finalized.get(node)) {
                continue;
            }
            finalized.insert(node.clone(), cost);
            explored.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return (path, explored);
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            seq += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                seq,
            });
        }
    }
    debug!(
        "Frontier exhausted after finalizing {} nodes without reaching the goal",
        explored.len()
    );
    (Vec::new(), explored)
}
