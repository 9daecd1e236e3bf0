//! Single-digit patterns: Skyscraper, 2-String Kite, and (Empty Rectangle) Rectangle Elimination.
//!
//! All three chain exactly two "strong links" (houses where a digit has only two candidate
//! cells) through a shared cell or box, then eliminate the digit from whatever sees both loose
//! ends.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{Action, CandidateGrid, Cell, Digit, House, Step, TechniqueTag, houses_of_cell};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

fn sees(a: Cell, b: Cell) -> bool {
    a != b && houses_of_cell(a).iter().any(|h| h.cells().contains(b))
}

fn two_candidate_houses(grid: &CandidateGrid, digit: Digit, houses: &[House]) -> Vec<(House, Cell, Cell)> {
    houses
        .iter()
        .filter_map(|&house| {
            let cells = grid.cells_with_candidate_in_house(digit, house);
            let mut iter = cells.into_iter();
            let first = iter.next()?;
            let second = iter.next()?;
            if iter.next().is_some() {
                return None;
            }
            Some((house, first, second))
        })
        .collect()
}

/// Two rows (or two columns) each with exactly two candidates for a digit, sharing one candidate
/// column (row): the other two candidates are the roof, and whatever sees both loses the digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct Skyscraper;

impl Skyscraper {
    /// Creates a new `Skyscraper` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for Skyscraper {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::Skyscraper
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        let rows: Vec<House> = (0..9).map(|y| House::Row { y }).collect();
        let columns: Vec<House> = (0..9).map(|x| House::Column { x }).collect();
        for digit in Digit::ALL {
            for orientation in [&rows, &columns] {
                let lines = two_candidate_houses(grid, digit, orientation);
                for i in 0..lines.len() {
                    for j in i + 1..lines.len() {
                        let (h1, a1, a2) = lines[i];
                        let (h2, b1, b2) = lines[j];
                        if let Some(action) = self.try_pair(grid, digit, h1, a1, a2, h2, b1, b2) {
                            return Ok(Some(action));
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}

impl Skyscraper {
    #[allow(clippy::too_many_arguments)]
    fn try_pair(
        &self,
        grid: &CandidateGrid,
        digit: Digit,
        h1: House,
        a1: Cell,
        a2: Cell,
        h2: House,
        b1: Cell,
        b2: Cell,
    ) -> Option<Action> {
        // Try every way of pairing a "shared base" cell from each line; whichever pairing
        // leaves a shared base house, the other two cells are the roof.
        for (base_a, roof_a) in [(a1, a2), (a2, a1)] {
            for (base_b, roof_b) in [(b1, b2), (b2, b1)] {
                let shares_base_house =
                    houses_of_cell(base_a).iter().any(|h| h.cells().contains(base_b));
                if !shares_base_house {
                    continue;
                }
                if roof_a == roof_b {
                    continue;
                }
                let eliminate: Vec<Cell> = grid
                    .cells_with_candidate(digit)
                    .into_iter()
                    .filter(|&c| {
                        c != roof_a
                            && c != roof_b
                            && c != base_a
                            && c != base_b
                            && sees(c, roof_a)
                            && sees(c, roof_b)
                    })
                    .collect();
                if eliminate.is_empty() {
                    continue;
                }
                let steps: Vec<Step> = eliminate
                    .into_iter()
                    .map(|cell| Step::Eliminate { cell, digit })
                    .collect();
                let description = PatternDescription {
                    technique: self.tag(),
                    clause: format!(
                        "{digit} forms a skyscraper across {h1} and {h2}, roofed at {} and {}",
                        sudoku_core::explain::cell_name(roof_a),
                        sudoku_core::explain::cell_name(roof_b)
                    ),
                    steps: steps.clone(),
                };
                return Some(Action::new(self.tag(), steps, render(&description)));
            }
        }
        None
    }
}

/// A row and a column, each with exactly two candidates for a digit, linked through a shared
/// box: the two free ends' intersection cell loses the digit if it holds it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoStringKite;

impl TwoStringKite {
    /// Creates a new `TwoStringKite` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for TwoStringKite {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::TwoStringKite
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        let rows: Vec<House> = (0..9).map(|y| House::Row { y }).collect();
        let columns: Vec<House> = (0..9).map(|x| House::Column { x }).collect();
        for digit in Digit::ALL {
            let row_lines = two_candidate_houses(grid, digit, &rows);
            let col_lines = two_candidate_houses(grid, digit, &columns);
            for &(_, r1, r2) in &row_lines {
                for &(_, c1, c2) in &col_lines {
                    for (row_link, row_free) in [(r1, r2), (r2, r1)] {
                        for (col_link, col_free) in [(c1, c2), (c2, c1)] {
                            let linked_same_box = row_link.box_index() == col_link.box_index()
                                && row_link != col_link;
                            if !linked_same_box {
                                continue;
                            }
                            let target = Cell::from_row_col(col_free.row(), row_free.col());
                            if target == row_free || target == col_free {
                                continue;
                            }
                            if !grid.candidates(target).contains(digit) {
                                continue;
                            }
                            let step = Step::Eliminate {
                                cell: target,
                                digit,
                            };
                            let description = PatternDescription {
                                technique: self.tag(),
                                clause: format!(
                                    "{digit} forms a two-string kite through {}",
                                    sudoku_core::explain::cell_name(row_link)
                                ),
                                steps: vec![step],
                            };
                            return Ok(Some(Action::new(
                                self.tag(),
                                vec![step],
                                render(&description),
                            )));
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}

/// Empty Rectangle / Rectangle Elimination: a box whose candidates for a digit are confined to
/// one row-slice and one column-slice of the box; a line crossing the column-slice with exactly
/// one candidate elsewhere licenses an elimination at the crossing of that candidate's row and
/// the box's row-slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleElimination;

impl RectangleElimination {
    /// Creates a new `RectangleElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for RectangleElimination {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::RectangleElimination
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for digit in Digit::ALL {
            for box_index in 0..9u8 {
                let box_house = House::Box { index: box_index };
                let box_cells = grid.cells_with_candidate(digit) & box_house.cells();
                if box_cells.len() < 2 {
                    continue;
                }
                let rows: Vec<u8> = box_cells.into_iter().map(Cell::row).collect();
                let cols: Vec<u8> = box_cells.into_iter().map(Cell::col).collect();
                let Some(&pivot_row) = rows.iter().find(|&&r| rows.iter().filter(|&&x| x == r).count() < box_cells.len() as usize) else {
                    continue;
                };
                let Some(&pivot_col) = cols.iter().find(|&&c| cols.iter().filter(|&&x| x == c).count() < box_cells.len() as usize) else {
                    continue;
                };
                let confined = box_cells
                    .into_iter()
                    .all(|c| c.row() == pivot_row || c.col() == pivot_col);
                if !confined {
                    continue;
                }

                // Look for a line crossing the pivot column with exactly one remaining
                // candidate outside the box: that candidate's row pairs with the pivot row.
                for x in 0..9u8 {
                    if x / 3 == box_house_col(box_index) {
                        continue;
                    }
                    let line = House::Column { x };
                    let candidates_outside_box =
                        grid.cells_with_candidate_in_house(digit, line) - box_house.cells();
                    let Some(other) = candidates_outside_box.as_single() else {
                        continue;
                    };
                    if other.row() == pivot_row {
                        continue;
                    }
                    let target = Cell::from_row_col(other.row(), pivot_col);
                    if !grid.candidates(target).contains(digit) || box_house.cells().contains(target) {
                        continue;
                    }
                    let step = Step::Eliminate {
                        cell: target,
                        digit,
                    };
                    let description = PatternDescription {
                        technique: self.tag(),
                        clause: format!(
                            "{digit} forms an empty rectangle in {box_house}, confined via {line}"
                        ),
                        steps: vec![step],
                    };
                    return Ok(Some(Action::new(self.tag(), vec![step], render(&description))));
                }
            }
        }
        Ok(None)
    }
}

fn box_house_col(box_index: u8) -> u8 {
    box_index % 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn skyscraper_eliminates_cell_seeing_both_roof_ends() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        // Row 0: candidates for D4 only at c0 (base) and c3 (roof).
        // Row 5: candidates for D4 only at c0 (base, shares column 0) and c6 (roof).
        let keep = [
            Cell::from_row_col(0, 0),
            Cell::from_row_col(0, 3),
            Cell::from_row_col(5, 0),
            Cell::from_row_col(5, 6),
        ];
        for row in [0u8, 5] {
            for col in 0u8..9 {
                let cell = Cell::from_row_col(row, col);
                if !keep.contains(&cell) {
                    grid.eliminate(cell, Digit::D4).unwrap();
                }
            }
        }
        let outcome = TechniqueTester::new(grid).apply_once(&Skyscraper::new());
        assert!(outcome.found());
        // The elimination target sees both roofs: column 3 (roof1) and row 5 (roof2) -> r5c3.
        outcome.assert_removed_includes(Cell::from_row_col(5, 3), [Digit::D4]);
    }

    #[test]
    fn no_skyscraper_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&Skyscraper::new())
            .assert_no_action();
    }

    #[test]
    fn no_two_string_kite_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&TwoStringKite::new())
            .assert_no_action();
    }

    #[test]
    fn no_rectangle_elimination_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&RectangleElimination::new())
            .assert_no_action();
    }
}
