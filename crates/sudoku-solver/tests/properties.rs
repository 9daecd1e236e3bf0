//! Property tests for solve-loop soundness, determinism, and oracle agreement.
//!
//! Each case starts from one known-valid, fully filled grid (the standard diagonal-shift Latin
//! square base pattern) and blanks out a random subset of its cells before handing the result to
//! [`TechniqueSolver`]. Every technique implemented here is a logical deduction, never a guess,
//! so any board reachable from a valid completion must stay consistent with it: these properties
//! would catch a technique that is unsound even though it looks locally plausible.

use proptest::collection::hash_set;
use proptest::prelude::*;
use sudoku_core::CandidateGrid;
use sudoku_solver::TechniqueSolver;
use sudoku_solver::oracle;

const BASE_SOLUTION: &str =
    "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

fn base_solution_grid() -> CandidateGrid {
    let mut grid = CandidateGrid::from_values(BASE_SOLUTION).unwrap();
    grid.initialize_candidates();
    grid
}

fn punctured(blanked: &std::collections::HashSet<usize>) -> CandidateGrid {
    let values: String = BASE_SOLUTION
        .char_indices()
        .map(|(i, c)| if blanked.contains(&i) { '.' } else { c })
        .collect();
    let mut grid = CandidateGrid::from_values(&values).unwrap();
    grid.initialize_candidates();
    grid
}

fn blanked_indices() -> impl Strategy<Value = std::collections::HashSet<usize>> {
    hash_set(0usize..81, 0..=30)
}

proptest! {
    /// Every Action the default registry applies stays consistent with the planted solution:
    /// placed digits match it, and no elimination ever removes the digit it needs.
    #[test]
    fn solve_all_never_contradicts_the_planted_solution(blanked in blanked_indices()) {
        let solution = base_solution_grid();
        let mut grid = punctured(&blanked);
        let solver = TechniqueSolver::new();
        let actions = solver.solve_all(&mut grid, 200).unwrap();
        prop_assert!(oracle::agrees_with_solution(&grid, &solution));
        for action in &actions {
            prop_assert!(!action.steps.is_empty());
        }
    }

    /// Two solves from identical starting boards with the default registry take the same path:
    /// the registry is searched in a fixed order and carries no hidden randomness.
    #[test]
    fn solve_all_is_deterministic(blanked in blanked_indices()) {
        let solver = TechniqueSolver::new();
        let mut first = punctured(&blanked);
        let mut second = first.clone();
        let actions_first = solver.solve_all(&mut first, 200).unwrap();
        let actions_second = solver.solve_all(&mut second, 200).unwrap();
        prop_assert_eq!(actions_first, actions_second);
        prop_assert_eq!(first, second);
    }

    /// A board the solve loop leaves unsolved still has at least one completion: the engine
    /// never narrows candidates down to an unsolvable state, checked against the oracle
    /// backtracker rather than against the engine's own notion of consistency.
    #[test]
    fn solve_all_never_eliminates_every_completion(
        blanked in hash_set(0usize..81, 0..=18)
    ) {
        let mut grid = punctured(&blanked);
        let solver = TechniqueSolver::new();
        solver.solve_all(&mut grid, 200).unwrap();
        prop_assert!(oracle::first_completion(&grid).is_some());
    }
}

#[test]
fn base_solution_grid_is_solved_and_consistent() {
    let grid = base_solution_grid();
    assert!(grid.is_solved());
    assert!(grid.check_consistency().is_ok());
}
