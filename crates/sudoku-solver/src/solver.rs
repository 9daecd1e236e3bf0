//! The solve loop: try each registered technique in order, apply the first that fires, repeat.

use log::debug;
use sudoku_core::{Action, CandidateGrid};

use crate::config::SolveConfig;
use crate::error::SolverError;
use crate::technique::{BoxedTechnique, default_registry};

/// A technique registry plus resource limits, ready to drive a board towards completion.
#[derive(Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
    config: SolveConfig,
}

impl TechniqueSolver {
    /// A solver with the default technique registry and default resource limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: default_registry(),
            config: SolveConfig::default(),
        }
    }

    /// A solver over a caller-chosen technique set (e.g. to restrict a solve to "easy"
    /// techniques only, or to benchmark one technique in isolation).
    #[must_use]
    pub fn with_techniques(techniques: Vec<BoxedTechnique>) -> Self {
        Self {
            techniques,
            config: SolveConfig::default(),
        }
    }

    /// Uses `config` instead of the default resource limits.
    #[must_use]
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Searches `grid` with each technique in registry order, returning the first Action found.
    /// Does not mutate `grid`.
    pub fn solve_one_step(&self, grid: &CandidateGrid) -> Result<Option<Action>, SolverError> {
        for technique in &self.techniques {
            if self.config.is_aborted() {
                return Err(SolverError::Aborted);
            }
            if let Some(action) = technique.find_action(grid, &self.config)? {
                debug!("{} fired: {}", technique.tag(), action.explanation);
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    /// Applies `action` to `grid`, surfacing any invariant violation it causes.
    pub fn apply_step(&self, grid: &mut CandidateGrid, action: &Action) -> Result<(), SolverError> {
        grid.apply(action)?;
        grid.check_consistency()?;
        Ok(())
    }

    /// Repeatedly finds and applies steps until the board is solved, no technique fires, a
    /// contradiction is hit, or `max_steps` actions have been applied.
    pub fn solve_all(
        &self,
        grid: &mut CandidateGrid,
        max_steps: usize,
    ) -> Result<Vec<Action>, SolverError> {
        let mut actions = Vec::new();
        while actions.len() < max_steps && !grid.is_solved() {
            let Some(action) = self.solve_one_step(grid)? else {
                break;
            };
            self.apply_step(grid, &action)?;
            actions.push(action);
        }
        Ok(actions)
    }
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TechniqueSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechniqueSolver")
            .field("technique_count", &self.techniques.len())
            .field("config", &self.config)
            .finish()
    }
}
