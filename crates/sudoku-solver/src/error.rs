//! Solver-level errors: board contradictions plus cooperative cancellation.

use derive_more::{Display, Error, From};
use sudoku_core::{ApplyError, ContradictionError, InvalidPlacement};

/// An error raised while finding or applying a technique's Action.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A board invariant was violated.
    Inconsistent(ContradictionError),
    /// An Action's Step was itself malformed (placing onto a given cell, or a digit no longer a
    /// candidate). Techniques never produce one of these themselves; this only arises from a
    /// caller replaying a stale or hand-built Action through [`apply_step`](crate::apply_step).
    InvalidStep(InvalidPlacement),
    /// Cooperative cancellation was observed.
    #[display("aborted")]
    Aborted,
}

impl From<ApplyError> for SolverError {
    fn from(error: ApplyError) -> Self {
        match error {
            ApplyError::Contradiction(e) => Self::Inconsistent(e),
            ApplyError::InvalidPlacement(e) => Self::InvalidStep(e),
        }
    }
}
