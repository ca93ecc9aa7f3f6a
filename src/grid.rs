use core::fmt;
use std::str::FromStr;

use fxhash::FxHashMap;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::error::SearchError;
use crate::terrain::{TerrainCostTable, TerrainLabel};

/// [GridMap] describes the searchable space: its bounds, the walls stored in a [BoolGrid]
/// (occupied is [true]) and the terrain painted on open cells.
///
/// Cells are addressed by `(row, col)`; internally the wall grid is indexed with `x = col` and
/// `y = row`. A cell is never both a wall and labelled: [set_wall](Self::set_wall) clears the
/// label and [set_terrain](Self::set_terrain) clears the wall.
#[derive(Clone, Debug)]
pub struct GridMap {
    walls: BoolGrid,
    terrain: FxHashMap<Cell, TerrainLabel>,
    rows: usize,
    cols: usize,
}

impl GridMap {
    /// Creates an open grid with no terrain.
    pub fn new(rows: usize, cols: usize) -> GridMap {
        GridMap {
            walls: BoolGrid::new(cols, rows, false),
            terrain: FxHashMap::default(),
            rows,
            cols,
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }
    fn check_bounds(&self, cell: Cell) {
        assert!(
            self.in_bounds(cell),
            "{} is outside the {}x{} grid",
            cell,
            self.rows,
            self.cols
        );
    }
    /// Whether the cell is a wall. Querying outside the grid is a bug in the caller and panics.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.check_bounds(cell);
        self.walls.get(cell.col, cell.row)
    }
    pub fn terrain(&self, cell: Cell) -> Option<&TerrainLabel> {
        self.check_bounds(cell);
        self.terrain.get(&cell)
    }
    /// Cost of entering the cell, 1 for unlabelled cells. Panics outside the grid.
    pub fn terrain_cost(&self, cell: Cell, costs: &TerrainCostTable) -> u32 {
        costs.cost(self.terrain(cell))
    }
    /// Whether a path may pass through the cell: inside the grid, not a wall and not painted with
    /// an impassable terrain.
    pub fn is_traversable(&self, cell: Cell, costs: &TerrainCostTable) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell) && !costs.is_impassable(self.terrain(cell))
    }

    pub fn set_wall(&mut self, cell: Cell, blocked: bool) {
        self.check_bounds(cell);
        if blocked {
            self.terrain.remove(&cell);
        }
        self.walls.set(cell.col, cell.row, blocked);
    }
    /// Walls off (or clears) the rectangle with the given top-left corner and size, clipped to
    /// the grid.
    pub fn set_rect_walls(&mut self, top_left: Cell, rows: usize, cols: usize, blocked: bool) {
        for r in top_left.row..top_left.row + rows as i32 {
            for c in top_left.col..top_left.col + cols as i32 {
                let cell = Cell::new(r, c);
                if self.in_bounds(cell) {
                    self.set_wall(cell, blocked);
                }
            }
        }
    }
    pub fn set_terrain(&mut self, cell: Cell, label: impl Into<TerrainLabel>) {
        self.check_bounds(cell);
        self.walls.set(cell.col, cell.row, false);
        self.terrain.insert(cell, label.into());
    }
    pub fn clear_terrain(&mut self, cell: Cell) -> Option<TerrainLabel> {
        self.check_bounds(cell);
        self.terrain.remove(&cell)
    }
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&c| self.is_blocked(c))
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }
    fn ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Links every traversable cell to its traversable 8-neighbours in a [UnionFind] indexed by
    /// `row * cols + col`.
    pub fn components(&self, costs: &TerrainCostTable) -> UnionFind<usize> {
        info!("Generating connected components");
        let mut components = UnionFind::new(self.rows * self.cols);
        for cell in self.cells() {
            if !self.is_traversable(cell, costs) {
                continue;
            }
            let parent_ix = self.ix(cell);
            // Half of the neighbourhood suffices as the other half links back to this cell.
            [
                Cell::new(cell.row, cell.col + 1),
                Cell::new(cell.row + 1, cell.col - 1),
                Cell::new(cell.row + 1, cell.col),
                Cell::new(cell.row + 1, cell.col + 1),
            ]
            .into_iter()
            .filter(|&n| self.is_traversable(n, costs))
            .for_each(|n| {
                components.union(parent_ix, self.ix(n));
            });
        }
        components
    }

    /// Checks if both cells are traversable and lie on the same connected component.
    pub fn reachable(&self, costs: &TerrainCostTable, start: Cell, goal: Cell) -> bool {
        if !self.is_traversable(start, costs) || !self.is_traversable(goal, costs) {
            return false;
        }
        let components = self.components(costs);
        let reachable = components.equiv(self.ix(start), self.ix(goal));
        if !reachable {
            info!("{} is not reachable from {}", goal, start);
        }
        reachable
    }
}

impl Default for GridMap {
    fn default() -> GridMap {
        GridMap::new(0, 0)
    }
}

/// Renders walls as `#` and open cells as `.`, one line per row.
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|c| if self.is_blocked(Cell::new(r, c)) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses an ASCII map with one line per row. As in Moving AI maps, `.`, `G` and `S` are open
/// and any other character is a wall.
impl FromStr for GridMap {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<GridMap, SearchError> {
        let lines = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let cols = match lines.first() {
            Some(l) => l.chars().count(),
            None => return Err(SearchError::ParseMap("map has no rows".to_owned())),
        };
        let mut grid = GridMap::new(lines.len(), cols);
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SearchError::ParseMap(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    line.chars().count(),
                    cols
                )));
            }
            for (c, tile) in line.chars().enumerate() {
                if !['.', 'G', 'S'].contains(&tile) {
                    grid.set_wall(Cell::new(r as i32, c as i32), true);
                }
            }
        }
        Ok(grid)
    }
}
