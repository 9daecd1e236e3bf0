//! The `Technique` trait every concrete deduction rule implements.

use sudoku_core::{Action, CandidateGrid, TechniqueTag};

use crate::config::SolveConfig;
use crate::error::SolverError;

/// A single human-recognisable deduction rule.
///
/// `find_action` must not mutate `grid`; the solve loop decides whether and when to apply the
/// returned Action, so callers can animate, reject, or batch it. A technique that finds several
/// independent deductions of the same kind in one pass may bundle them into a single Action's
/// `steps`.
pub trait Technique: std::fmt::Debug {
    /// This technique's tag, used to attribute any Action it produces.
    fn tag(&self) -> TechniqueTag;

    /// Searches `grid` for this technique's pattern, returning the Action it licenses if found.
    fn find_action(
        &self,
        grid: &CandidateGrid,
        config: &SolveConfig,
    ) -> Result<Option<Action>, SolverError>;

    /// Clones this technique into a fresh box, so [`BoxedTechnique`] can implement `Clone`.
    fn clone_box(&self) -> BoxedTechnique;
}

/// A type-erased [`Technique`].
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.as_ref().clone_box()
    }
}
