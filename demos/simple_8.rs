use grid_search::{search, Cell, GridMap, SearchOptions, Strategy, TerrainCostTable};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Every strategy is run in turn; cells have an 8-neighbourhood.

fn main() {
    let mut grid = GridMap::new(3, 3);
    grid.set_wall(Cell::new(1, 1), true);
    let costs = TerrainCostTable::new();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    for strategy in Strategy::ALL {
        let report = search(strategy, &grid, &costs, start, end, &SearchOptions::default())
            .expect("endpoints are open");
        println!("{}", report);
        println!("Path:");
        for p in report.path() {
            println!("{}", p);
        }
    }
}
