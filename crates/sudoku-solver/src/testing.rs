//! A small fluent test harness for exercising one [`Technique`] at a time.

use sudoku_core::{Action, CandidateGrid, Cell, Digit, Step};

use crate::config::SolveConfig;
use crate::technique::traits::Technique;

/// Wraps a board and runs a single technique against it, then offers fluent assertions over
/// the resulting [`Action`] (or its absence).
pub struct TechniqueTester {
    grid: CandidateGrid,
    config: SolveConfig,
}

impl TechniqueTester {
    /// Starts a tester over `grid`.
    #[must_use]
    pub fn new(grid: CandidateGrid) -> Self {
        Self {
            grid,
            config: SolveConfig::default(),
        }
    }

    /// Uses `config` instead of the default resource limits.
    #[must_use]
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs `technique` once against the current board and returns the outcome for assertion.
    #[must_use]
    #[track_caller]
    pub fn apply_once(&self, technique: &dyn Technique) -> TechniqueOutcome {
        let action = technique
            .find_action(&self.grid, &self.config)
            .expect("technique search must not hit a board contradiction in this test");
        TechniqueOutcome {
            action,
            grid: self.grid.clone(),
        }
    }
}

/// The result of running one technique once: the Action it found (if any), plus the board it
/// was found against (for assertions that need to read candidates the Action doesn't mention).
pub struct TechniqueOutcome {
    action: Option<Action>,
    grid: CandidateGrid,
}

impl TechniqueOutcome {
    /// Asserts no Action was found.
    #[track_caller]
    pub fn assert_no_action(&self) -> &Self {
        assert!(
            self.action.is_none(),
            "expected no action, got {:?}",
            self.action
        );
        self
    }

    /// Whether a technique fired.
    #[must_use]
    pub fn found(&self) -> bool {
        self.action.is_some()
    }

    /// Asserts an Action was found and returns it for further inspection.
    #[track_caller]
    pub fn action(&self) -> &Action {
        self.action
            .as_ref()
            .unwrap_or_else(|| panic!("expected an action, found none"))
    }

    /// Asserts the Action places `digit` at `cell`.
    #[track_caller]
    pub fn assert_placed(&self, cell: Cell, digit: Digit) -> &Self {
        let action = self.action();
        let found = action
            .steps
            .iter()
            .any(|&step| step == Step::Place { cell, digit });
        assert!(
            found,
            "expected Place {{ {cell}, {digit} }} among {:?}",
            action.steps
        );
        self
    }

    /// Asserts the Action eliminates every digit in `digits` from `cell`.
    #[track_caller]
    pub fn assert_removed_includes(&self, cell: Cell, digits: impl IntoIterator<Item = Digit>) -> &Self {
        let action = self.action();
        for digit in digits {
            let found = action
                .steps
                .iter()
                .any(|&step| step == Step::Eliminate { cell, digit });
            assert!(
                found,
                "expected Eliminate {{ {cell}, {digit} }} among {:?}",
                action.steps
            );
        }
        self
    }

    /// Asserts the Action does not eliminate `digit` from `cell` and does not place into it.
    #[track_caller]
    pub fn assert_no_change(&self, cell: Cell) -> &Self {
        if let Some(action) = &self.action {
            let touched = action.steps.iter().any(|&step| match step {
                Step::Place { cell: c, .. } | Step::Eliminate { cell: c, .. } => c == cell,
            });
            assert!(!touched, "expected {cell} untouched, action was {action:?}");
        }
        self
    }

    /// The board the technique was run against.
    #[must_use]
    pub fn grid(&self) -> &CandidateGrid {
        &self.grid
    }
}
