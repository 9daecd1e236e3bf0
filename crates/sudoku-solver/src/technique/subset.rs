//! Naked Subset and Hidden Subset, sizes 2 through 4 (pairs, triples, quads).

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{
    Action, CandidateGrid, Cell, CellSet, ContradictionError, Digit, DigitSet, House, Step,
    TechniqueTag, houses_of_cell,
};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// Enumerates every `k`-element combination of `items`, as an iterator of owned `Vec<T>`s.
/// Never materialises the full power set; only combinations of the requested size.
fn k_combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }
    let mut result = Vec::new();
    for i in 0..=items.len() - k {
        for mut rest in k_combinations(&items[i + 1..], k - 1) {
            let mut combo = Vec::with_capacity(k);
            combo.push(items[i]);
            combo.append(&mut rest);
            result.push(combo);
        }
    }
    result
}

/// If every cell in `cells` shares exactly one house other than `exclude`, returns it.
fn shared_second_house(cells: &[Cell], exclude: House) -> Option<House> {
    let mut candidates: Vec<House> = houses_of_cell(cells[0])
        .into_iter()
        .filter(|&h| h != exclude)
        .collect();
    for &cell in &cells[1..] {
        let this_cells_houses = houses_of_cell(cell);
        candidates.retain(|h| this_cells_houses.contains(h));
    }
    candidates.into_iter().next()
}

/// For each house, an `n`-subset (`n` in `2..=4`) of empty cells whose candidates' union has
/// size exactly `n`: those `n` digits can be eliminated from every other cell of the house (and
/// of a second house, if all `n` cells also share one).
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    max_size: usize,
}

impl NakedSubset {
    /// Creates a new `NakedSubset` technique searching sizes `2..=max_size`.
    #[must_use]
    pub const fn new(max_size: usize) -> Self {
        Self { max_size }
    }
}

impl Technique for NakedSubset {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::NakedSubset
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for size in 2..=self.max_size.min(config.size_cap) {
            for house in House::ALL {
                if config.is_aborted() {
                    return Err(SolverError::Aborted);
                }
                let empty_cells: Vec<Cell> = house
                    .cells()
                    .into_iter()
                    .filter(|&c| grid.value(c).is_none())
                    .collect();
                for combo in k_combinations(&empty_cells, size) {
                    let digits: DigitSet = combo.iter().map(|&c| grid.candidates(c)).fold(
                        DigitSet::EMPTY,
                        |acc, m| acc | m,
                    );
                    if digits.len() as usize > size {
                        continue;
                    }
                    if digits.len() as usize < size {
                        return Err(SolverError::Inconsistent(
                            ContradictionError::CandidateConstraintViolation,
                        ));
                    }
                    let combo_set: CellSet = combo.iter().copied().collect();
                    let mut eliminate_cells = house.cells() - combo_set;
                    if let Some(second_house) = shared_second_house(&combo, house) {
                        eliminate_cells = eliminate_cells | (second_house.cells() - combo_set);
                    }

                    let steps: Vec<Step> = eliminate_cells
                        .into_iter()
                        .flat_map(|cell| {
                            digits
                                .into_iter()
                                .filter(move |&d| grid.candidates(cell).contains(d))
                                .map(move |digit| Step::Eliminate { cell, digit })
                        })
                        .collect();
                    if steps.is_empty() {
                        continue;
                    }
                    let cell_names: Vec<String> = combo
                        .iter()
                        .map(|&c| sudoku_core::explain::cell_name(c))
                        .collect();
                    let description = PatternDescription {
                        technique: self.tag(),
                        clause: format!(
                            "{} form a naked subset of {:?} in {house}",
                            cell_names.join(","),
                            digits.into_iter().map(Digit::value).collect::<Vec<_>>()
                        ),
                        steps: steps.clone(),
                    };
                    return Ok(Some(Action::new(self.tag(), steps, render(&description))));
                }
            }
        }
        Ok(None)
    }
}

/// Dual of [`NakedSubset`]: for each house, an `n`-subset of digits whose candidate cells
/// within the house number exactly `n`; every other digit can be eliminated from those cells.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSubset {
    max_size: usize,
}

impl HiddenSubset {
    /// Creates a new `HiddenSubset` technique searching sizes `2..=max_size`.
    #[must_use]
    pub const fn new(max_size: usize) -> Self {
        Self { max_size }
    }
}

impl Technique for HiddenSubset {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::HiddenSubset
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for size in 2..=self.max_size.min(config.size_cap) {
            for house in House::ALL {
                if config.is_aborted() {
                    return Err(SolverError::Aborted);
                }
                let live_digits: Vec<Digit> = Digit::ALL
                    .into_iter()
                    .filter(|&d| !grid.cells_with_candidate_in_house(d, house).is_empty())
                    .collect();
                for combo in k_combinations(&live_digits, size) {
                    let cells: CellSet = combo
                        .iter()
                        .map(|&d| grid.cells_with_candidate_in_house(d, house))
                        .fold(CellSet::EMPTY, |acc, m| acc | m);
                    if cells.len() as usize > size {
                        continue;
                    }
                    if cells.len() as usize < size {
                        return Err(SolverError::Inconsistent(
                            ContradictionError::CandidateConstraintViolation,
                        ));
                    }
                    let digit_set: DigitSet = combo.iter().copied().collect();
                    let steps: Vec<Step> = cells
                        .into_iter()
                        .flat_map(|cell| {
                            grid.candidates(cell)
                                .difference(digit_set)
                                .into_iter()
                                .map(move |digit| Step::Eliminate { cell, digit })
                        })
                        .collect();
                    if steps.is_empty() {
                        continue;
                    }
                    let description = PatternDescription {
                        technique: self.tag(),
                        clause: format!(
                            "{:?} form a hidden subset in {house}",
                            combo.iter().map(|d| d.value()).collect::<Vec<_>>()
                        ),
                        steps: steps.clone(),
                    };
                    return Ok(Some(Action::new(self.tag(), steps, render(&description))));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn naked_pair_eliminates_from_rest_of_row() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let pos1 = Cell::from_row_col(0, 0);
        let pos2 = Cell::from_row_col(0, 1);
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                grid.eliminate(pos1, digit).unwrap();
                grid.eliminate(pos2, digit).unwrap();
            }
        }
        TechniqueTester::new(grid)
            .apply_once(&NakedSubset::new(4))
            .assert_removed_includes(Cell::from_row_col(0, 4), [Digit::D1, Digit::D2]);
    }

    #[test]
    fn naked_subset_also_eliminates_in_shared_box() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        // Both cells in row 0 AND box 0: pair also licenses elimination in box 0.
        let pos1 = Cell::from_row_col(0, 0);
        let pos2 = Cell::from_row_col(0, 1);
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                grid.eliminate(pos1, digit).unwrap();
                grid.eliminate(pos2, digit).unwrap();
            }
        }
        TechniqueTester::new(grid)
            .apply_once(&NakedSubset::new(4))
            .assert_removed_includes(Cell::from_row_col(1, 2), [Digit::D1, Digit::D2]);
    }

    #[test]
    fn hidden_pair_eliminates_other_digits_from_its_cells() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let house = House::Row { y: 0 };
        let pos1 = Cell::from_row_col(0, 0);
        let pos2 = Cell::from_row_col(0, 1);
        for cell in house.cells() {
            if cell != pos1 && cell != pos2 {
                grid.eliminate(cell, Digit::D1).unwrap();
                grid.eliminate(cell, Digit::D2).unwrap();
            }
        }
        TechniqueTester::new(grid)
            .apply_once(&HiddenSubset::new(4))
            .assert_removed_includes(pos1, [Digit::D3]);
    }

    #[test]
    fn no_action_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid.clone())
            .apply_once(&NakedSubset::new(4))
            .assert_no_action();
        TechniqueTester::new(grid)
            .apply_once(&HiddenSubset::new(4))
            .assert_no_action();
    }
}
