//! Micro-benchmarks for the end-to-end solve loop.
//!
//! Each benchmark measures [`TechniqueSolver::solve_all`] driving a whole puzzle to completion
//! (or as far as the default registry can take it), as opposed to `benches/techniques.rs`, which
//! isolates a single `find_action` call.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use criterion::{BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use sudoku_core::CandidateGrid;
use sudoku_solver::TechniqueSolver;

const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const LOCKED_CANDIDATES_GADGET: &str =
    ".5..346..........8.3.879....15.....6...26..5.......92..4..27.13.73...........87..";

fn parsed(values: &str) -> CandidateGrid {
    let mut grid = CandidateGrid::from_values(values).unwrap();
    grid.initialize_candidates();
    grid
}

fn bench_solve_all(c: &mut Criterion) {
    let solver = TechniqueSolver::new();
    let boards = [
        ("classic", parsed(CLASSIC)),
        ("locked_candidates_gadget", parsed(LOCKED_CANDIDATES_GADGET)),
    ];
    let mut group = c.benchmark_group("solve_all");
    for (name, grid) in &boards {
        group.bench_with_input(BenchmarkId::from_parameter(name), grid, |b, grid| {
            b.iter_batched_ref(
                || grid.clone(),
                |grid| solver.solve_all(grid, 500).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    name = benches_solver;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_solve_all,
);
criterion_main!(benches_solver);
