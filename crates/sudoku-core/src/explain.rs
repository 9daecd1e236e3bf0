//! The single formatter that turns structured pattern data into explanation strings.
//!
//! Kept separate from each technique so that output stays stable for regression tests: a
//! technique builds a [`PatternDescription`] and hands it here rather than concatenating strings
//! itself.

use crate::cell::Cell;
use crate::digit::Digit;
use crate::step::{Step, TechniqueTag};

/// Formats a single atomic Step as `rXcY=D` (placement) or `rXcY<>D` (elimination), 1-based.
#[must_use]
pub fn format_step(step: Step) -> String {
    match step {
        Step::Place { cell, digit } => format!("{}={}", cell_name(cell), digit),
        Step::Eliminate { cell, digit } => format!("{}<>{}", cell_name(cell), digit),
    }
}

/// Formats a cell as `rXcY`, 1-based.
#[must_use]
pub fn cell_name(cell: Cell) -> String {
    format!("r{}c{}", cell.row() + 1, cell.col() + 1)
}

/// Structured evidence for one deduction: a free-form clause describing the pattern, plus the
/// steps it licenses. [`render`] joins these into the final explanation string.
#[derive(Debug, Clone)]
pub struct PatternDescription {
    /// Which technique this is.
    pub technique: TechniqueTag,
    /// A short clause describing the pattern that was found, e.g. `"in r2, 7 can only be in
    /// r2 & b1"`. Does not repeat the technique name or the resulting steps.
    pub clause: String,
    /// The steps the pattern licenses.
    pub steps: Vec<Step>,
}

/// Renders a [`PatternDescription`] into the `[Technique] clause => step, step, ...` form used
/// throughout the engine's explanation strings.
#[must_use]
pub fn render(description: &PatternDescription) -> String {
    let steps = description
        .steps
        .iter()
        .map(|&step| format_step(step))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "[{}] {} => {}",
        description.technique.label(),
        description.clause,
        steps
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_placement() {
        let cell = Cell::from_row_col(4, 6);
        assert_eq!(format_step(Step::Place { cell, digit: Digit::D7 }), "r5c7=7");
    }

    #[test]
    fn formats_elimination() {
        let cell = Cell::from_row_col(0, 2);
        assert_eq!(
            format_step(Step::Eliminate { cell, digit: Digit::D7 }),
            "r1c3<>7"
        );
    }

    #[test]
    fn renders_full_house_example() {
        let cell = Cell::from_row_col(4, 6);
        let description = PatternDescription {
            technique: TechniqueTag::FullHouse,
            clause: "r5c7 is the only missing cell in r5".to_owned(),
            steps: vec![Step::Place { cell, digit: Digit::D7 }],
        };
        assert_eq!(
            render(&description),
            "[FullHouse] r5c7 is the only missing cell in r5 => r5c7=7"
        );
    }
}
