use grid_search::{Cell, DfsSolver, GridMap, GridSolver, TerrainCostTable, DEFAULT_MAX_DEPTH};

// Depth-limited DFS refuses to expand cells that lie too many moves from the start, so a goal
// that is further away than the bound is never reached. The trace still shows what was explored.

fn main() {
    let grid: GridMap = "\
..........
.########.
.#......#.
.#.####.#.
.#....#...
.######.#.
.........."
        .parse()
        .expect("valid map");
    let costs = TerrainCostTable::new();
    let start = Cell::new(0, 0);
    let end = Cell::new(4, 2);
    println!("{}", grid);
    for max_depth in [0, 4, 8, 16, DEFAULT_MAX_DEPTH] {
        let report = DfsSolver::with_max_depth(max_depth)
            .search(&grid, &costs, start, end)
            .expect("endpoints are open");
        println!("max depth {:>3}: {}", max_depth, report);
    }
}
