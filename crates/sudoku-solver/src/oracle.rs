//! A brute-force backtracking completion search, kept strictly as a verification oracle.
//!
//! [`TechniqueSolver`](crate::TechniqueSolver) never calls into this module: every board it
//! produces comes from a chain of attributable [`Action`](sudoku_core::Action)s.
//! `first_completion` exists so tests
//! can ask an independent question — "does some completion of this board exist, and does it
//! agree with the board's current values and candidates" — without trusting the same technique
//! code under test. Cells are branched on in minimum-remaining-candidates order, the usual
//! heuristic for keeping a backtracking search shallow.

use sudoku_core::{CandidateGrid, Cell};

/// Finds any completion of `grid` consistent with its current givens, values, and candidate
/// masks, trying the cell with the fewest remaining candidates first. Returns `None` if no
/// completion exists (the board, or some candidate branch of it, is already contradictory).
///
/// This clones the board at every branch point rather than undoing placements in place,
/// matching the hypothesis-and-roll-back style `sudoku_solver::technique::forcing_chain` already
/// uses for its own trial placements.
#[must_use]
pub fn first_completion(grid: &CandidateGrid) -> Option<CandidateGrid> {
    if grid.check_consistency().is_err() {
        return None;
    }
    search(grid.clone())
}

fn search(grid: CandidateGrid) -> Option<CandidateGrid> {
    if grid.is_solved() {
        return Some(grid);
    }
    let cell = pick_min_candidate_cell(&grid)?;
    for digit in grid.candidates(cell) {
        let mut branch = grid.clone();
        if branch.place(cell, digit).is_err() {
            continue;
        }
        if branch.check_consistency().is_err() {
            continue;
        }
        if let Some(solved) = search(branch) {
            return Some(solved);
        }
    }
    None
}

/// The empty cell with the fewest candidates, or `None` if the board is already solved.
fn pick_min_candidate_cell(grid: &CandidateGrid) -> Option<Cell> {
    grid.empty_cells()
        .into_iter()
        .min_by_key(|&cell| grid.candidates(cell).len())
}

/// Whether `grid`'s placed values and remaining candidates are all consistent with `solution`:
/// every filled cell matches, and no empty cell's candidate mask has lost `solution`'s digit.
///
/// Used by property tests to check that a technique (or a whole `solve_all` run) never places
/// the wrong digit and never eliminates the one candidate a valid completion actually needs.
#[must_use]
pub fn agrees_with_solution(grid: &CandidateGrid, solution: &CandidateGrid) -> bool {
    Cell::all().all(|cell| {
        let expected = solution
            .value(cell)
            .expect("a full solution has a value in every cell");
        match grid.value(cell) {
            Some(actual) => actual == expected,
            None => grid.candidates(cell).contains(expected),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn finds_a_completion_of_a_solvable_puzzle() {
        let mut grid = CandidateGrid::from_values(CLASSIC).unwrap();
        grid.initialize_candidates();
        let solution = first_completion(&grid).expect("the classic puzzle has a completion");
        assert!(solution.is_solved());
        assert!(solution.check_consistency().is_ok());
        assert!(agrees_with_solution(&grid, &solution));
    }

    #[test]
    fn refuses_an_already_contradictory_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let cell = Cell::new(0);
        for digit in sudoku_core::Digit::ALL {
            if digit != sudoku_core::Digit::D1 {
                grid.eliminate(cell, digit).unwrap();
            }
        }
        // Emptying the one remaining candidate without placing it leaves the cell unsolved
        // and contradictory: no completion can exist.
        assert!(grid.eliminate(cell, sudoku_core::Digit::D1).is_err());
        assert!(first_completion(&grid).is_none());
    }
}
