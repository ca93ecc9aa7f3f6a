use core::fmt;
use std::borrow::Borrow;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::error::SearchError;
use crate::{DEFAULT_TERRAIN_COST, IMPASSABLE_COST};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Symbolic terrain category painted onto a cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerrainLabel(String);

impl TerrainLabel {
    pub fn new(label: impl Into<String>) -> TerrainLabel {
        TerrainLabel(label.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TerrainLabel {
    fn from(label: &str) -> TerrainLabel {
        TerrainLabel::new(label)
    }
}

impl From<String> for TerrainLabel {
    fn from(label: String) -> TerrainLabel {
        TerrainLabel(label)
    }
}

impl Borrow<str> for TerrainLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerrainLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps terrain labels to the cost of entering a cell carrying that label. Labels without an
/// entry cost [DEFAULT_TERRAIN_COST]. A cost at or above [IMPASSABLE_COST] makes the terrain
/// behave like a wall.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerrainCostTable {
    costs: FxIndexMap<TerrainLabel, u32>,
}

impl TerrainCostTable {
    pub fn new() -> TerrainCostTable {
        TerrainCostTable::default()
    }

    /// The four terrains offered by the map editor, in the order its buttons list them.
    pub fn palette() -> TerrainCostTable {
        let mut table = TerrainCostTable::new();
        for (label, cost) in [("green", 3), ("black", 2), ("white", 1), ("blue", 10)] {
            table.costs.insert(TerrainLabel::from(label), cost);
        }
        table
    }

    /// Sets the cost of a terrain, rejecting zero since every step must cost at least 1.
    pub fn set_cost(&mut self, label: impl Into<TerrainLabel>, cost: u32) -> Result<(), SearchError> {
        let label = label.into();
        if cost < DEFAULT_TERRAIN_COST {
            return Err(SearchError::InvalidTerrainCost {
                label: label.0,
                cost,
            });
        }
        self.costs.insert(label, cost);
        Ok(())
    }

    /// Marks a terrain as impassable.
    pub fn set_impassable(&mut self, label: impl Into<TerrainLabel>) {
        self.costs.insert(label.into(), IMPASSABLE_COST);
    }

    /// Shifts the cost of a terrain by `delta`, never going below 1. Unknown labels start from
    /// the default cost. Returns the new cost.
    pub fn adjust(&mut self, label: impl Into<TerrainLabel>, delta: i64) -> u32 {
        let entry = self.costs.entry(label.into()).or_insert(DEFAULT_TERRAIN_COST);
        let adjusted = (*entry as i64 + delta).clamp(DEFAULT_TERRAIN_COST as i64, u32::MAX as i64);
        *entry = adjusted as u32;
        *entry
    }

    pub fn remove(&mut self, label: &str) -> Option<u32> {
        self.costs.shift_remove(label)
    }

    /// Cost of entering a cell with the given label, [DEFAULT_TERRAIN_COST] when unlabelled or
    /// unknown.
    pub fn cost(&self, label: Option<&TerrainLabel>) -> u32 {
        label
            .and_then(|l| self.costs.get(l.as_str()))
            .copied()
            .unwrap_or(DEFAULT_TERRAIN_COST)
    }

    pub fn is_impassable(&self, label: Option<&TerrainLabel>) -> bool {
        self.cost(label) >= IMPASSABLE_COST
    }

    /// Smallest passable step cost, counting the default cost of unlabelled cells.
    pub fn min_cost(&self) -> u32 {
        self.costs
            .values()
            .copied()
            .filter(|&c| c < IMPASSABLE_COST)
            .fold(DEFAULT_TERRAIN_COST, u32::min)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TerrainLabel, u32)> {
        self.costs.iter().map(|(l, c)| (l, *c))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
