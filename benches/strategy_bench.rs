use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{
    AstarSolver, BfsSolver, Cell, Chebyshev, DfsSolver, GridMap, GridSolver, TerrainCostTable,
    UcsSolver,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 32;

/// A square grid with random walls and terrain plus start/goal pairs on open cells.
fn generate_map(costs: &TerrainCostTable) -> (GridMap, Vec<(Cell, Cell)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let labels = costs.iter().map(|(l, _)| l.clone()).collect::<Vec<_>>();
    let mut grid = GridMap::new(N, N);
    for cell in grid.cells().collect::<Vec<_>>() {
        if rng.gen_bool(0.25) {
            grid.set_wall(cell, true);
        } else if rng.gen_bool(0.2) {
            grid.set_terrain(cell, labels[rng.gen_range(0..labels.len())].clone());
        }
    }
    let random_open = |rng: &mut StdRng| loop {
        let c = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if grid.is_traversable(c, costs) {
            return c;
        }
    };
    let scenarios = (0..N_SCENARIOS)
        .map(|_| (random_open(&mut rng), random_open(&mut rng)))
        .collect::<Vec<_>>();
    (grid, scenarios)
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, label: &str, solver: S) {
    let costs = TerrainCostTable::palette();
    let (grid, scenarios) = generate_map(&costs);
    c.bench_function(format!("{N}x{N}, {label}").as_str(), |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                black_box(solver.search(&grid, &costs, *start, *goal).unwrap());
            }
        })
    });
}

fn strategy_bench(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
    bench_solver(c, "DFS", DfsSolver::new());
    bench_solver(c, "UCS", UcsSolver);
    bench_solver(c, "Astar (manhattan)", AstarSolver::new());
    bench_solver(c, "Astar (chebyshev)", AstarSolver::with_heuristic(Chebyshev));
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
