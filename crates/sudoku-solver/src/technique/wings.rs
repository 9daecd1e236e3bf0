//! XY-Wing, XYZ-Wing, and W-Wing: short chains of two or three bivalue/trivalue cells.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{
    Action, CandidateGrid, Cell, Digit, DigitSet, House, Step, TechniqueTag, houses_of_cell,
};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

fn sees(a: Cell, b: Cell) -> bool {
    a != b && houses_of_cell(a).iter().any(|h| h.cells().contains(b))
}

/// Pivot cell with candidates `{x, y}`, two pincers sharing a house with the pivot, holding
/// `{x, z}` and `{y, z}` respectively: `z` can be eliminated from any cell seeing both pincers.
#[derive(Debug, Default, Clone, Copy)]
pub struct XyWing;

impl XyWing {
    /// Creates a new `XyWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for XyWing {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::XYWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        let bivalue_cells: Vec<Cell> = grid
            .empty_cells()
            .into_iter()
            .filter(|&c| grid.candidates(c).len() == 2)
            .collect();
        for &pivot in &bivalue_cells {
            let pivot_digits = grid.candidates(pivot);
            let peers: Vec<Cell> = bivalue_cells
                .iter()
                .copied()
                .filter(|&c| sees(pivot, c))
                .collect();
            for i in 0..peers.len() {
                for j in 0..peers.len() {
                    if i == j {
                        continue;
                    }
                    let a = peers[i];
                    let b = peers[j];
                    let da = grid.candidates(a);
                    let db = grid.candidates(b);
                    if (da & pivot_digits).len() != 1 || (db & pivot_digits).len() != 1 {
                        continue;
                    }
                    let shared_with_pivot_a = (da & pivot_digits).as_single().unwrap();
                    let shared_with_pivot_b = (db & pivot_digits).as_single().unwrap();
                    if shared_with_pivot_a == shared_with_pivot_b {
                        continue;
                    }
                    let z_a = (da - pivot_digits).as_single();
                    let z_b = (db - pivot_digits).as_single();
                    let (Some(z_a), Some(z_b)) = (z_a, z_b) else {
                        continue;
                    };
                    if z_a != z_b {
                        continue;
                    }
                    let z = z_a;
                    let eliminate: Vec<Cell> = grid
                        .cells_with_candidate(z)
                        .into_iter()
                        .filter(|&c| c != pivot && c != a && c != b && sees(c, a) && sees(c, b))
                        .collect();
                    if eliminate.is_empty() {
                        continue;
                    }
                    let steps: Vec<Step> = eliminate
                        .into_iter()
                        .map(|cell| Step::Eliminate { cell, digit: z })
                        .collect();
                    let description = PatternDescription {
                        technique: self.tag(),
                        clause: format!(
                            "{} - {} - {} form an XY-Wing on {z}",
                            sudoku_core::explain::cell_name(pivot),
                            sudoku_core::explain::cell_name(a),
                            sudoku_core::explain::cell_name(b),
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

/// Pivot cell with candidates `{x, y, z}`, two pincers sharing a house with the pivot, holding
/// `{x, z}` and `{y, z}` respectively: `z` can be eliminated from any cell seeing the pivot and
/// both pincers.
#[derive(Debug, Default, Clone, Copy)]
pub struct XyzWing;

impl XyzWing {
    /// Creates a new `XyzWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for XyzWing {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::XYZWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        let trivalue_cells: Vec<Cell> = grid
            .empty_cells()
            .into_iter()
            .filter(|&c| grid.candidates(c).len() == 3)
            .collect();
        let bivalue_cells: Vec<Cell> = grid
            .empty_cells()
            .into_iter()
            .filter(|&c| grid.candidates(c).len() == 2)
            .collect();
        for &pivot in &trivalue_cells {
            let pivot_digits = grid.candidates(pivot);
            let pincers: Vec<(Cell, DigitSet)> = bivalue_cells
                .iter()
                .copied()
                .filter(|&c| sees(pivot, c))
                .filter_map(|c| {
                    let d = grid.candidates(c);
                    (d.is_subset(pivot_digits)).then_some((c, d))
                })
                .collect();
            for i in 0..pincers.len() {
                for j in i + 1..pincers.len() {
                    let (a, da) = pincers[i];
                    let (b, db) = pincers[j];
                    let Some(z) = (da & db).as_single() else {
                        continue;
                    };
                    let eliminate: Vec<Cell> = grid
                        .cells_with_candidate(z)
                        .into_iter()
                        .filter(|&c| {
                            c != pivot
                                && c != a
                                && c != b
                                && sees(c, pivot)
                                && sees(c, a)
                                && sees(c, b)
                        })
                        .collect();
                    if eliminate.is_empty() {
                        continue;
                    }
                    let steps: Vec<Step> = eliminate
                        .into_iter()
                        .map(|cell| Step::Eliminate { cell, digit: z })
                        .collect();
                    let description = PatternDescription {
                        technique: self.tag(),
                        clause: format!(
                            "{} - {} - {} form an XYZ-Wing on {z}",
                            sudoku_core::explain::cell_name(pivot),
                            sudoku_core::explain::cell_name(a),
                            sudoku_core::explain::cell_name(b),
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

/// Two bivalue cells sharing candidates `{x, y}`, linked by a strong link on `y` between a peer
/// of each: `x` can be eliminated from any cell seeing both bivalue cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct WWing;

impl WWing {
    /// Creates a new `WWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for WWing {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::WWing
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        _config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        let bivalue_cells: Vec<(Cell, Digit, Digit)> = grid
            .empty_cells()
            .into_iter()
            .filter_map(|c| grid.candidates(c).as_double().map(|(x, y)| (c, x, y)))
            .collect();
        for i in 0..bivalue_cells.len() {
            for j in i + 1..bivalue_cells.len() {
                let (a, x, y) = bivalue_cells[i];
                let (b, bx, by) = bivalue_cells[j];
                if (bx, by) != (x, y) || sees(a, b) {
                    continue;
                }
                for (strong_digit, eliminate_digit) in [(y, x), (x, y)] {
                    if let Some(house) = conjugate_house_linking(grid, strong_digit, a, b) {
                        let eliminate: Vec<Cell> = grid
                            .cells_with_candidate(eliminate_digit)
                            .into_iter()
                            .filter(|&c| c != a && c != b && sees(c, a) && sees(c, b))
                            .collect();
                        if eliminate.is_empty() {
                            continue;
                        }
                        let steps: Vec<Step> = eliminate
                            .into_iter()
                            .map(|cell| Step::Eliminate {
                                cell,
                                digit: eliminate_digit,
                            })
                            .collect();
                        let description = PatternDescription {
                            technique: self.tag(),
                            clause: format!(
                                "{} and {} form a W-Wing on {eliminate_digit}, linked via {strong_digit} in {house}",
                                sudoku_core::explain::cell_name(a),
                                sudoku_core::explain::cell_name(b),
                            ),
                            steps: steps.clone(),
                        };
                        return Ok(Some(Action::new(self.tag(), steps, render(&description))));
                    }
                }
            }
        }
        Ok(None)
    }
}

/// A house where `digit`'s only two candidates are one peer of `a` and one peer of `b`.
fn conjugate_house_linking(grid: &CandidateGrid, digit: Digit, a: Cell, b: Cell) -> Option<House> {
    House::ALL.into_iter().find(|&house| {
        let cells = grid.cells_with_candidate_in_house(digit, house);
        let Some((first, second)) = cells.as_double() else {
            return false;
        };
        (sees(first, a) && sees(second, b)) || (sees(first, b) && sees(second, a))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn xy_wing_eliminates_shared_digit() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let pivot = Cell::from_row_col(0, 0);
        let a = Cell::from_row_col(0, 4); // shares row 0 with pivot
        let b = Cell::from_row_col(4, 0); // shares column 0 with pivot
        for digit in Digit::ALL {
            if ![Digit::D1, Digit::D2].contains(&digit) {
                grid.eliminate(pivot, digit).unwrap();
            }
            if ![Digit::D1, Digit::D3].contains(&digit) {
                grid.eliminate(a, digit).unwrap();
            }
            if ![Digit::D2, Digit::D3].contains(&digit) {
                grid.eliminate(b, digit).unwrap();
            }
        }
        let outcome = TechniqueTester::new(grid).apply_once(&XyWing::new());
        assert!(outcome.found());
        let target = Cell::from_row_col(4, 4);
        outcome.assert_removed_includes(target, [Digit::D3]);
    }

    #[test]
    fn no_xy_wing_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&XyWing::new())
            .assert_no_action();
    }

    #[test]
    fn no_xyz_wing_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&XyzWing::new())
            .assert_no_action();
    }

    #[test]
    fn no_w_wing_on_blank_board() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        TechniqueTester::new(grid)
            .apply_once(&WWing::new())
            .assert_no_action();
    }
}
