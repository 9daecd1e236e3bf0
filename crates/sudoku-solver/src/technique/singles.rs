//! Hidden Single and Naked Single.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{Action, CandidateGrid, Digit, House, Step, TechniqueTag};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// For each house and digit, if only one empty cell in the house still has that digit as a
/// candidate, the digit must go there.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingle {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::HiddenSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for house in House::ALL {
            for digit in Digit::ALL {
                let cells = grid.cells_with_candidate_in_house(digit, house);
                let Some(cell) = cells.as_single() else {
                    continue;
                };
                let step = Step::Place { cell, digit };
                let description = PatternDescription {
                    technique: self.tag(),
                    clause: format!(
                        "{digit} is the only possible cell for it in {house}",
                        digit = digit
                    ),
                    steps: vec![step],
                };
                return Ok(Some(Action::new(self.tag(), vec![step], render(&description))));
            }
        }
        Ok(None)
    }
}

/// For each empty cell with exactly one candidate, that candidate must be its value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for NakedSingle {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::NakedSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for cell in grid.empty_cells() {
            let Some(digit) = grid.candidates(cell).as_single() else {
                continue;
            };
            let step = Step::Place { cell, digit };
            let description = PatternDescription {
                technique: self.tag(),
                clause: format!(
                    "{digit} is the only possible value to fill {cell}",
                    cell = sudoku_core::explain::cell_name(cell)
                ),
                steps: vec![step],
            };
            return Ok(Some(Action::new(self.tag(), vec![step], render(&description))));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use sudoku_core::Cell;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn naked_single_fires_on_single_candidate_cell() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let cell = Cell::from_row_col(4, 4);
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                grid.eliminate(cell, digit).unwrap();
            }
        }
        TechniqueTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_placed(cell, Digit::D5);
    }

    #[test]
    fn hidden_single_fires_when_only_one_cell_in_house_can_hold_digit() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let house = sudoku_core::House::Row { y: 0 };
        let target = Cell::from_row_col(0, 4);
        for cell in house.cells() {
            if cell != target {
                grid.eliminate(cell, Digit::D5).unwrap();
            }
        }
        TechniqueTester::new(grid)
            .apply_once(&HiddenSingle::new())
            .assert_placed(target, Digit::D5);
    }

    #[test]
    fn classic_puzzle_first_action_is_naked_single_at_r5c5() {
        let puzzle =
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let mut grid = CandidateGrid::from_values(puzzle).unwrap();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_placed(Cell::from_row_col(4, 4), Digit::D5);
    }
}
