use grid_search::{AstarSolver, BfsSolver, Cell, Chebyshev, GridMap, GridSolver, TerrainCostTable, UcsSolver};

// A river of blue terrain (cost 10) crosses the map with a single ford of white terrain (cost 1).
// BFS wades straight through, the cost-aware strategies walk to the ford.
//
// |S.~....|
// |..~....|
// |.......|  <- ford
// |..~....|
// |..~...E|

fn main() {
    let mut grid = GridMap::new(5, 7);
    for r in 0..5 {
        grid.set_terrain(Cell::new(r, 2), if r == 2 { "white" } else { "blue" });
    }
    let costs = TerrainCostTable::palette();
    let start = Cell::new(0, 0);
    let end = Cell::new(4, 6);

    let reports = [
        BfsSolver.search(&grid, &costs, start, end),
        UcsSolver.search(&grid, &costs, start, end),
        AstarSolver::with_heuristic(Chebyshev).search(&grid, &costs, start, end),
    ];
    for report in reports {
        match report {
            Ok(report) => {
                println!("{}", report);
                let path = report.path().iter().map(|c| c.to_string()).collect::<Vec<_>>();
                println!("  {}", path.join(" -> "));
            }
            Err(e) => println!("{}", e),
        }
    }
}
