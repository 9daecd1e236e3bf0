//! Full House: a house with exactly one empty cell left.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{Action, CandidateGrid, Digit, DigitSet, House, Step, TechniqueTag};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// For each house, if exactly one cell is empty, the missing digit must go there.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullHouse;

impl FullHouse {
    /// Creates a new `FullHouse` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for FullHouse {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::FullHouse
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
            let empty_in_house: Vec<_> = house
                .cells()
                .into_iter()
                .filter(|&cell| grid.value(cell).is_none())
                .collect();
            if empty_in_house.len() != 1 {
                continue;
            }
            let cell = empty_in_house[0];
            let placed: DigitSet = house
                .cells()
                .into_iter()
                .filter_map(|c| grid.value(c))
                .collect();
            let Some(digit) = placed.complement().as_single() else {
                continue;
            };
            let step = Step::Place { cell, digit };
            let description = PatternDescription {
                technique: self.tag(),
                clause: format!(
                    "{} is the only missing cell in {house}",
                    sudoku_core::explain::cell_name(cell)
                ),
                steps: vec![step],
            };
            return Ok(Some(Action::new(self.tag(), vec![step], render(&description))));
        }
        Ok(None)
    }
}
