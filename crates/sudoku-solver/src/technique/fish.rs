//! Fish: Basic, Finned (Sashimi folded in), Franken, and Mutant.
//!
//! A fish for digit `d` is a pair `(base, cover)` of equal-size families of pairwise-disjoint
//! houses such that every cell holding `d` in a base house is covered by some cover house.
//! Cells covered but not in any base house lose `d`. The four variants differ only in which
//! house kinds may appear in `base`/`cover`, and whether "fins" (uncovered base cells) are
//! tolerated.

use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{
    Action, CandidateGrid, Cell, CellSet, Digit, House, Step, TechniqueTag, houses_of_cell,
};

use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// Which house kinds may appear in a fish's base/cover families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HouseKind {
    Row,
    Column,
    Box,
}

fn houses_of_kinds(kinds: &[HouseKind]) -> Vec<House> {
    let mut houses = Vec::new();
    for &kind in kinds {
        match kind {
            HouseKind::Row => houses.extend((0..9).map(|y| House::Row { y })),
            HouseKind::Column => houses.extend((0..9).map(|x| House::Column { x })),
            HouseKind::Box => houses.extend((0..9).map(|index| House::Box { index })),
        }
    }
    houses
}

/// Enumerates `k`-element combinations of *pairwise cell-disjoint* houses from `pool`.
fn disjoint_house_combinations(pool: &[House], k: usize) -> Vec<Vec<House>> {
    fn go(pool: &[House], k: usize, start: usize, chosen: &mut Vec<House>, out: &mut Vec<Vec<House>>) {
        if chosen.len() == k {
            out.push(chosen.clone());
            return;
        }
        for i in start..pool.len() {
            let candidate = pool[i];
            let disjoint = chosen.iter().all(|&h| (h.cells() & candidate.cells()).is_empty());
            if !disjoint {
                continue;
            }
            chosen.push(candidate);
            go(pool, k, i + 1, chosen, out);
            chosen.pop();
        }
    }
    let mut out = Vec::new();
    go(pool, k, 0, &mut Vec::new(), &mut out);
    out
}

/// The four fish variants, in the search order the default registry dispatches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishVariant {
    Basic,
    Finned,
    Franken,
    Mutant,
}

impl FishVariant {
    fn tag(self) -> TechniqueTag {
        match self {
            Self::Basic => TechniqueTag::BasicFish,
            Self::Finned => TechniqueTag::FinnedFish,
            Self::Franken => TechniqueTag::FrankenFish,
            Self::Mutant => TechniqueTag::MutantFish,
        }
    }

    fn allows_fins(self) -> bool {
        matches!(self, Self::Finned)
    }

    /// `(base_kinds, cover_kinds)` pairs to try, in order. Basic/Franken try both orientations;
    /// Mutant allows any mix on either side.
    fn family_passes(self) -> Vec<(Vec<HouseKind>, Vec<HouseKind>)> {
        use HouseKind::{Box as HBox, Column, Row};
        match self {
            Self::Basic | Self::Finned => vec![
                (vec![Row], vec![Column]),
                (vec![Column], vec![Row]),
            ],
            Self::Franken => vec![
                (vec![Row, HBox], vec![Column, HBox]),
                (vec![Column, HBox], vec![Row, HBox]),
            ],
            Self::Mutant => vec![(vec![Row, Column, HBox], vec![Row, Column, HBox])],
        }
    }

    fn fish_name(self, size: usize) -> &'static str {
        match (self, size) {
            (Self::Basic, 2) => "X-Wing",
            (Self::Basic, 3) => "Swordfish",
            (Self::Basic, 4) => "Jellyfish",
            (Self::Finned, 2) => "Finned X-Wing",
            (Self::Finned, 3) => "Finned Swordfish",
            (Self::Finned, 4) => "Finned Jellyfish",
            (Self::Franken, _) => "Franken Fish",
            (Self::Mutant, _) => "Mutant Fish",
            _ => "Fish",
        }
    }
}

/// A generalized Fish search over one of the four variants.
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    variant: FishVariant,
}

impl Fish {
    /// Creates a Fish technique for `variant`, searching sizes `2..=config.size_cap`.
    #[must_use]
    pub const fn new(variant: FishVariant) -> Self {
        Self { variant }
    }
}

impl Technique for Fish {
    fn tag(&self) -> TechniqueTag {
        self.variant.tag()
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for size in 2..=config.size_cap.min(4) {
            for (base_kinds, cover_kinds) in self.variant.family_passes() {
                if config.is_aborted() {
                    return Err(SolverError::Aborted);
                }
                let base_pool = houses_of_kinds(&base_kinds);
                let cover_pool = houses_of_kinds(&cover_kinds);
                for digit in Digit::ALL {
                    for base_houses in disjoint_house_combinations(&base_pool, size) {
                        // Every base house must actually hold the digit somewhere; an inactive
                        // house contributes no cells and would let the others stand in as a
                        // smaller, unsound fish.
                        if base_houses
                            .iter()
                            .any(|&h| grid.cells_with_candidate_in_house(digit, h).is_empty())
                        {
                            continue;
                        }
                        let base_cells: CellSet = base_houses
                            .iter()
                            .map(|&h| grid.cells_with_candidate_in_house(digit, h))
                            .fold(CellSet::EMPTY, |acc, m| acc | m);
                        if base_cells.is_empty() {
                            continue;
                        }

                        for cover_houses in disjoint_house_combinations(&cover_pool, size) {
                            // Base and cover houses must be distinct house instances.
                            if cover_houses.iter().any(|c| base_houses.contains(c)) {
                                continue;
                            }
                            let cover_cells: CellSet = cover_houses
                                .iter()
                                .map(|&h| h.cells())
                                .fold(CellSet::EMPTY, |acc, m| acc | m);

                            let fins = base_cells - cover_cells;
                            if fins.is_empty() == self.variant.allows_fins() {
                                // Basic/Franken/Mutant require zero fins; Finned requires some.
                                continue;
                            }
                            if !base_cells.is_subset(cover_cells | fins) {
                                continue;
                            }

                            let cover_digit_cells: CellSet = cover_houses
                                .iter()
                                .map(|&h| grid.cells_with_candidate_in_house(digit, h))
                                .fold(CellSet::EMPTY, |acc, m| acc | m);
                            let mut eliminate_cells = cover_digit_cells - base_cells;
                            if !fins.is_empty() {
                                eliminate_cells = restrict_to_fin_peers(eliminate_cells, fins);
                            }
                            if eliminate_cells.is_empty() {
                                continue;
                            }

                            let steps: Vec<Step> = eliminate_cells
                                .into_iter()
                                .map(|cell| Step::Eliminate { cell, digit })
                                .collect();
                            let base_names: Vec<String> =
                                base_houses.iter().map(|h| h.name()).collect();
                            let cover_names: Vec<String> =
                                cover_houses.iter().map(|h| h.name()).collect();
                            let description = PatternDescription {
                                technique: self.tag(),
                                clause: format!(
                                    "{} on {digit}: bases {:?}, covers {:?}",
                                    self.variant.fish_name(size),
                                    base_names,
                                    cover_names
                                ),
                                steps: steps.clone(),
                            };
                            return Ok(Some(Action::new(
                                self.tag(),
                                steps,
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

/// Restricts `cells` to those sharing a house with *every* fin cell (the Finned fish
/// elimination condition: a covered-but-not-based cell only loses the digit if it's a peer of
/// every fin, i.e. it sits in the intersection of "houses of each fin").
fn restrict_to_fin_peers(cells: CellSet, fins: CellSet) -> CellSet {
    cells
        .into_iter()
        .filter(|&cell| {
            fins.into_iter().all(|fin| {
                fin == cell
                    || houses_of_cell(fin)
                        .iter()
                        .any(|&h| h.cells().contains(cell))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_wing_gadget_eliminates_outside_the_two_rows() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        // Digit 5 has exactly two candidate cells in rows 0 and 3, both in columns 2 and 6.
        for row in [0u8, 3] {
            for col in 0u8..9 {
                if col != 2 && col != 6 {
                    grid.eliminate(Cell::from_row_col(row, col), Digit::D5).unwrap();
                }
            }
        }
        let action = Fish::new(FishVariant::Basic)
            .find_action(&grid, &SolveConfig::default())
            .unwrap()
            .expect("expected a basic fish action");
        assert_eq!(action.technique, TechniqueTag::BasicFish);
        let eliminates_col2_row1 = action.steps.contains(&Step::Eliminate {
            cell: Cell::from_row_col(1, 2),
            digit: Digit::D5,
        });
        assert!(eliminates_col2_row1, "expected elimination outside the base rows: {:?}", action.steps);
    }

    #[test]
    fn no_fish_when_candidates_are_spread_out() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        let result = Fish::new(FishVariant::Basic)
            .find_action(&grid, &SolveConfig::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn inactive_base_house_does_not_fake_a_fish() {
        let mut grid = CandidateGrid::new();
        grid.initialize_candidates();
        // Row 0 has digit 5 confined to columns 2 and 6, same as the real X-Wing gadget...
        for col in 0u8..9 {
            if col != 2 && col != 6 {
                grid.eliminate(Cell::from_row_col(0, col), Digit::D5).unwrap();
            }
        }
        // ...but row 3 has no candidate 5 left at all, so it cannot serve as the second base
        // house: pairing row 0 with row 3 must not "find" an X-Wing on columns 2 and 6.
        for col in 0u8..9 {
            grid.eliminate(Cell::from_row_col(3, col), Digit::D5).unwrap();
        }
        let result = Fish::new(FishVariant::Basic)
            .find_action(&grid, &SolveConfig::default())
            .unwrap();
        assert!(
            result.is_none(),
            "an inactive base house must not validate a fish: {result:?}"
        );
    }
}
