/// Fuzzes the solvers on many random grids with walls and terrain, checking that every strategy
/// finds a path exactly when start and goal share a connected component, that the paths are
/// walkable, and that the optimal strategies agree on the cost.
use fxhash::FxHashSet;
use grid_search::{
    AstarSolver, BfsSolver, Cell, Chebyshev, DfsSolver, GridMap, GridSolver, SearchProblem,
    SearchReport, TerrainCostTable, UcsSolver,
};
use rand::prelude::*;

const LABELS: [&str; 4] = ["green", "black", "white", "blue"];

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, wall_density: f64) -> GridMap {
    let mut grid = GridMap::new(rows, cols);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let cell = Cell::new(r, c);
            if rng.gen_bool(wall_density) {
                grid.set_wall(cell, true);
            } else if rng.gen_bool(0.3) {
                grid.set_terrain(cell, LABELS[rng.gen_range(0..LABELS.len())]);
            }
        }
    }
    grid
}

fn random_open_cell(grid: &GridMap, costs: &TerrainCostTable, rng: &mut StdRng) -> Option<Cell> {
    let open = grid
        .cells()
        .filter(|&c| grid.is_traversable(c, costs))
        .collect::<Vec<_>>();
    open.choose(rng).copied()
}

fn visualize_grid(grid: &GridMap, start: &Cell, end: &Cell) {
    for r in 0..grid.rows() as i32 {
        for c in 0..grid.cols() as i32 {
            let p = Cell::new(r, c);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_walkable(
    report: &SearchReport,
    grid: &GridMap,
    costs: &TerrainCostTable,
    start: Cell,
    goal: Cell,
) {
    let path = report.path();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(path.iter().all(|&c| grid.is_traversable(c, costs)));
    assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
}

fn assert_trace_sound(report: &SearchReport, grid: &GridMap, costs: &TerrainCostTable) {
    let explored = report.explored();
    assert!(explored.iter().all(|&c| grid.is_traversable(c, costs)));
    let unique = explored.iter().collect::<FxHashSet<_>>();
    assert_eq!(unique.len(), explored.len());
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let costs = TerrainCostTable::palette();
    let chebyshev = AstarSolver::with_heuristic(Chebyshev);

    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, 0.35);
        let (Some(start), Some(goal)) = (
            random_open_cell(&grid, &costs, &mut rng),
            random_open_cell(&grid, &costs, &mut rng),
        ) else {
            continue;
        };
        let reachable = grid.reachable(&costs, start, goal);
        let bfs = BfsSolver.search(&grid, &costs, start, goal).unwrap();
        let dfs = DfsSolver::new().search(&grid, &costs, start, goal).unwrap();
        let ucs = UcsSolver.search(&grid, &costs, start, goal).unwrap();
        let astar = chebyshev.search(&grid, &costs, start, goal).unwrap();

        for report in [&bfs, &dfs, &ucs, &astar] {
            // Show the grid if a path is not found
            if report.found() != reachable {
                visualize_grid(&grid, &start, &goal);
            }
            assert_eq!(report.found(), reachable, "{}", report.strategy);
            assert_trace_sound(report, &grid, &costs);
            if reachable {
                assert_walkable(report, &grid, &costs, start, goal);
                assert_eq!(report.explored().last(), Some(&goal));
            }
        }
        if reachable {
            assert_eq!(ucs.stats.total_cost, astar.stats.total_cost);
            for report in [&dfs, &ucs, &astar] {
                assert!(ucs.stats.total_cost <= report.stats.total_cost);
                assert!(bfs.stats.path_length <= report.stats.path_length);
            }
        } else {
            // Without a path every strategy exhausts the start's component.
            let component = bfs.explored().iter().collect::<FxHashSet<_>>();
            for report in [&dfs, &ucs, &astar] {
                assert_eq!(report.explored().iter().collect::<FxHashSet<_>>(), component);
            }
        }
    }
}

/// Unit costs everywhere: BFS, UCS and A* must all return paths with as many moves as the
/// optimum, and UCS must report that many as cost.
#[test]
fn fuzz_unit_cost_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let costs = TerrainCostTable::new();
    let chebyshev = AstarSolver::with_heuristic(Chebyshev);

    for _ in 0..N_GRIDS {
        let mut grid = GridMap::new(N, N);
        for cell in grid.cells().collect::<Vec<_>>() {
            grid.set_wall(cell, rng.gen_bool(0.3));
        }
        let (Some(start), Some(goal)) = (
            random_open_cell(&grid, &costs, &mut rng),
            random_open_cell(&grid, &costs, &mut rng),
        ) else {
            continue;
        };
        let problem = SearchProblem::new(&grid, &costs, start, goal).unwrap();
        let bfs = BfsSolver.report(&problem);
        let ucs = UcsSolver.report(&problem);
        let astar = chebyshev.report(&problem);
        if !bfs.found() {
            continue;
        }
        let moves = bfs.stats.path_length - 1;
        assert_eq!(ucs.stats.total_cost, moves as u64);
        assert_eq!(astar.stats.total_cost, moves as u64);
        assert!(moves as i32 >= start.chebyshev_distance(&goal));
    }
}

#[test]
fn searches_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let costs = TerrainCostTable::palette();
    for _ in 0..50 {
        let grid = random_grid(12, 9, &mut rng, 0.25);
        let (Some(start), Some(goal)) = (
            random_open_cell(&grid, &costs, &mut rng),
            random_open_cell(&grid, &costs, &mut rng),
        ) else {
            continue;
        };
        let solvers: [&dyn GridSolver; 5] = [
            &BfsSolver,
            &DfsSolver::new(),
            &UcsSolver,
            &AstarSolver::new(),
            &AstarSolver::with_heuristic(Chebyshev),
        ];
        for solver in solvers {
            let first = solver.search(&grid, &costs, start, goal).unwrap();
            let second = solver.search(&grid, &costs, start, goal).unwrap();
            assert_eq!(first.result, second.result, "{}", solver.name());
        }
    }
}
