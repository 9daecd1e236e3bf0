//! Forcing Chain: hypothesize a candidate, propagate singles, and treat a resulting
//! contradiction as proof the candidate was wrong.
//!
//! Only self-negating chains are detected here: "if `d` goes in `cell`, the board becomes
//! inconsistent" licenses eliminating `d` from `cell`. Chains that instead prove a *different*
//! cell's value (because two disjoint hypotheses both force it) are a documented gap - see
//! [`super::stubs`].

use log::trace;
use sudoku_core::explain::{PatternDescription, render};
use sudoku_core::{Action, CandidateGrid, Step, TechniqueTag};

use super::singles::{HiddenSingle, NakedSingle};
use super::traits::{BoxedTechnique, Technique};
use crate::config::SolveConfig;
use crate::error::SolverError;

/// Hypothesizes one candidate at a time and propagates forced singles up to
/// [`SolveConfig::forcing_chain_depth`] steps; a contradiction proves the candidate false.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForcingChain;

impl ForcingChain {
    /// Creates a new `ForcingChain` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Propagates forced singles from `grid` up to `depth` steps, returning `Err` the moment a
    /// contradiction is reached, and `Ok(())` if propagation runs dry without one.
    fn propagate(grid: &mut CandidateGrid, depth: usize) -> Result<(), ()> {
        let config = SolveConfig::default();
        for _ in 0..depth {
            if grid.check_consistency().is_err() {
                return Err(());
            }
            let next = NakedSingle::new()
                .find_action(grid, &config)
                .ok()
                .flatten()
                .or_else(|| HiddenSingle::new().find_action(grid, &config).ok().flatten());
            let Some(action) = next else {
                break;
            };
            if grid.apply(&action).is_err() {
                return Err(());
            }
        }
        grid.check_consistency().map_err(|_| ())
    }
}

impl Technique for ForcingChain {
    fn tag(&self) -> TechniqueTag {
        TechniqueTag::ForcingChain
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find_action(
        &self,
        grid: &CandidateGrid,
        config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError> {
        for cell in grid.empty_cells() {
            if config.is_aborted() {
                return Err(SolverError::Aborted);
            }
            for digit in grid.candidates(cell) {
                let mut hypothesis = grid.clone();
                if hypothesis.place(cell, digit).is_err() {
                    continue;
                }
                if Self::propagate(&mut hypothesis, config.forcing_chain_depth).is_ok() {
                    continue;
                }
                trace!("forcing chain: {cell}={digit} self-negates, eliminating it");
                let step = Step::Eliminate { cell, digit };
                let description = PatternDescription {
                    technique: self.tag(),
                    clause: format!(
                        "assuming {cell}={digit} forces a contradiction within {} steps",
                        config.forcing_chain_depth
                    ),
                    steps: vec![step],
                };
                return Ok(Some(Action::new(self.tag(), vec![step], render(&description))));
            }
        }
        Ok(None)
    }
}
