//! Micro-benchmarks for individual technique searches.
//!
//! Each benchmark measures the cost of one `find_action` call on a representative board state.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench techniques
//! ```

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudoku_core::{CandidateGrid, Cell, Digit, House};
use sudoku_solver::SolveConfig;
use sudoku_solver::technique::fish::{Fish, FishVariant};
use sudoku_solver::technique::full_house::FullHouse;
use sudoku_solver::technique::locked_candidates::LockedCandidates;
use sudoku_solver::technique::singles::{HiddenSingle, NakedSingle};
use sudoku_solver::technique::subset::{HiddenSubset, NakedSubset};
use sudoku_solver::technique::traits::Technique;

fn bench_find_action_cases<T>(
    c: &mut Criterion,
    bench_name: &'static str,
    technique: &T,
    boards: &[(&'static str, CandidateGrid)],
) where
    T: Technique,
{
    let config = SolveConfig::default();
    for (param, grid) in boards {
        c.bench_with_input(BenchmarkId::new(bench_name, param), grid, |b, grid| {
            b.iter_batched_ref(
                || grid.clone(),
                |grid| technique.find_action(grid, &config).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
}

fn blank_board() -> CandidateGrid {
    let mut grid = CandidateGrid::new();
    grid.initialize_candidates();
    grid
}

fn full_house_board() -> CandidateGrid {
    let mut grid = blank_board();
    for x in 0..8u8 {
        let digit = Digit::from_value(x + 1);
        grid.place(Cell::from_row_col(0, x), digit).unwrap();
    }
    grid
}

fn naked_single_board() -> CandidateGrid {
    let mut grid = blank_board();
    let cell = Cell::from_row_col(4, 4);
    for digit in Digit::ALL {
        if digit != Digit::D5 {
            grid.eliminate(cell, digit).unwrap();
        }
    }
    grid
}

fn hidden_single_board() -> CandidateGrid {
    let mut grid = blank_board();
    let target = Cell::from_row_col(0, 4);
    for cell in House::Row { y: 0 }.cells() {
        if cell != target {
            grid.eliminate(cell, Digit::D5).unwrap();
        }
    }
    grid
}

fn locked_candidates_board() -> CandidateGrid {
    let mut grid = blank_board();
    for cell in House::Box { index: 0 }.cells() {
        if cell.row() != 0 {
            grid.eliminate(cell, Digit::D7).unwrap();
        }
    }
    grid
}

fn naked_pair_board() -> CandidateGrid {
    let mut grid = blank_board();
    let pos1 = Cell::from_row_col(0, 0);
    let pos2 = Cell::from_row_col(0, 1);
    for digit in Digit::ALL {
        if digit != Digit::D1 && digit != Digit::D2 {
            grid.eliminate(pos1, digit).unwrap();
            grid.eliminate(pos2, digit).unwrap();
        }
    }
    grid
}

fn x_wing_board() -> CandidateGrid {
    let mut grid = blank_board();
    for row in [0u8, 3] {
        for col in 0u8..9 {
            if col != 2 && col != 6 {
                grid.eliminate(Cell::from_row_col(row, col), Digit::D5)
                    .unwrap();
            }
        }
    }
    grid
}

fn bench_full_house(c: &mut Criterion) {
    let boards = [
        ("full_house", full_house_board()),
        ("empty", blank_board()),
    ];
    bench_find_action_cases(c, "full_house_find_action", &FullHouse::new(), &boards);
}

fn bench_naked_single(c: &mut Criterion) {
    let boards = [
        ("naked_single", naked_single_board()),
        ("empty", blank_board()),
    ];
    bench_find_action_cases(c, "naked_single_find_action", &NakedSingle::new(), &boards);
}

fn bench_hidden_single(c: &mut Criterion) {
    let boards = [
        ("hidden_single", hidden_single_board()),
        ("empty", blank_board()),
    ];
    bench_find_action_cases(c, "hidden_single_find_action", &HiddenSingle::new(), &boards);
}

fn bench_locked_candidates(c: &mut Criterion) {
    let boards = [
        ("locked_candidates", locked_candidates_board()),
        ("empty", blank_board()),
    ];
    bench_find_action_cases(
        c,
        "locked_candidates_find_action",
        &LockedCandidates::new(),
        &boards,
    );
}

fn bench_naked_subset(c: &mut Criterion) {
    let boards = [("naked_pair", naked_pair_board()), ("empty", blank_board())];
    bench_find_action_cases(c, "naked_subset_find_action", &NakedSubset::new(4), &boards);
}

fn bench_hidden_subset(c: &mut Criterion) {
    let boards = [("naked_pair", naked_pair_board()), ("empty", blank_board())];
    bench_find_action_cases(
        c,
        "hidden_subset_find_action",
        &HiddenSubset::new(4),
        &boards,
    );
}

fn bench_basic_fish(c: &mut Criterion) {
    let boards = [("x_wing", x_wing_board()), ("empty", blank_board())];
    bench_find_action_cases(
        c,
        "basic_fish_find_action",
        &Fish::new(FishVariant::Basic),
        &boards,
    );
}

criterion_group!(
    name = benches_full_house;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_full_house,
);

criterion_group!(
    name = benches_naked_single;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_naked_single,
);

criterion_group!(
    name = benches_hidden_single;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_hidden_single,
);

criterion_group!(
    name = benches_locked_candidates;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_locked_candidates,
);

criterion_group!(
    name = benches_naked_subset;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_naked_subset,
);

criterion_group!(
    name = benches_hidden_subset;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_hidden_subset,
);

criterion_group!(
    name = benches_basic_fish;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets = bench_basic_fish,
);

criterion_main!(
    benches_full_house,
    benches_naked_single,
    benches_hidden_single,
    benches_locked_candidates,
    benches_naked_subset,
    benches_hidden_subset,
    benches_basic_fish,
);
