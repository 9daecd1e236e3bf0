//! Locked Candidates: Pointing and Claiming, the two box/line intersection reductions.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{Action, CandidateGrid, CellSet, Digit, House, Step, TechniqueTag};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// For every box/line pair with a non-empty intersection, if a digit's candidates inside one
/// house are confined to the intersection, it can be eliminated from the rest of the other
/// house.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Creates a new `LockedCandidates` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for LockedCandidates {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::LockedCandidates
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for box_index in 0..9u8 {
            let box_house = House::Box { index: box_index };
            let box_cells = box_house.cells();
            let box_row = box_index / 3 * 3;
            let box_col = box_index % 3 * 3;
            let lines = [
                House::Row { y: box_row },
                House::Row { y: box_row + 1 },
                House::Row { y: box_row + 2 },
                House::Column { x: box_col },
                House::Column { x: box_col + 1 },
                House::Column { x: box_col + 2 },
            ];
            for line in lines {
                let intersection = box_cells & line.cells();
                if intersection.is_empty() {
                    continue;
                }
                let rest_of_box = box_cells - intersection;
                let rest_of_line = line.cells() - intersection;

                for digit in Digit::ALL {
                    let locked_in_intersection =
                        !(grid.cells_with_candidate(digit) & intersection).is_empty();
                    // Pointing: digit confined to the intersection within the box -> eliminate
                    // from the rest of the line.
                    if locked_in_intersection
                        && (grid.cells_with_candidate(digit) & rest_of_box).is_empty()
                    {
                        if let Some(action) =
                            self.eliminate_from(grid, digit, rest_of_line, line, box_house)
                        {
                            return Ok(Some(action));
                        }
                    }
                    // Claiming: digit confined to the intersection within the line -> eliminate
                    // from the rest of the box.
                    if locked_in_intersection
                        && (grid.cells_with_candidate(digit) & rest_of_line).is_empty()
                    {
                        if let Some(action) =
                            self.eliminate_from(grid, digit, rest_of_box, line, box_house)
                        {
                            return Ok(Some(action));
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}

impl LockedCandidates {
    /// Builds the elimination Action for one direction. `line`/`box_house` are always passed in
    /// that order regardless of which one the digit is confined to, so the rendered clause
    /// always reads `in {line}, {digit} can only be in {line} & {box_house}`.
    fn eliminate_from(
        &self,
        grid: &CandidateGrid,
        digit: Digit,
        target_cells: CellSet,
        line: House,
        box_house: House,
    ) -> Option<Action> {
        let to_eliminate = grid.cells_with_candidate(digit) & target_cells;
        if to_eliminate.is_empty() {
            return None;
        }
        let steps: Vec<Step> = to_eliminate
            .into_iter()
            .map(|cell| Step::Eliminate { cell, digit })
            .collect();
        let description = PatternDescription {
            technique: self.tag(),
            clause: format!("in {line}, {digit} can only be in {line} & {box_house}"),
            steps: steps.clone(),
        };
        Some(Action::new(self.tag(), steps, render(&description)))
    }
}
