//! Board representation for the human-style Sudoku deduction engine: bit-set primitives, the
//! candidate-grid board model, the house index, and the Step/Action data model.
//!
//! This crate owns parsing, serialisation, and the board invariants. It has no notion of
//! *technique* — that lives one layer up, in `sudoku-solver`, which only ever touches the board
//! through [`CandidateGrid`]'s public API.

pub mod bitset;
pub mod board;
pub mod cell;
pub mod digit;
pub mod error;
pub mod explain;
pub mod house;
pub mod index;
pub mod step;

pub use bitset::{BitSet9, BitSet81};
pub use board::{ApplyError, CandidateGrid, DigitGrid, houses_of_cell};
pub use cell::{Cell, CellSemantics, CellSet};
pub use digit::{Digit, DigitSemantics, DigitSet};
pub use error::{ContradictionError, InvalidPlacement, ParseError};
pub use house::House;
pub use step::{Action, Step, TechniqueTag};
