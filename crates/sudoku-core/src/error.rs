//! Error types raised by parsing and board mutation.

use derive_more::{Display, Error};

use crate::cell::Cell;
use crate::digit::Digit;

/// A malformed value string or candidate grid.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A value string's length was not exactly 81.
    #[display("value string has length {length}, expected 81")]
    WrongLength {
        /// The length actually found.
        length: usize,
    },
    /// A value string contained a byte outside `. 0-9`.
    #[display("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its 0-based position in the input.
        position: usize,
    },
    /// A candidate grid did not contain exactly 81 digit-runs.
    #[display("candidate grid has {count} cells, expected 81")]
    WrongCellCount {
        /// The count of digit-runs actually found.
        count: usize,
    },
    /// A candidate grid run was empty, or contained a digit twice, or was out of `1..=9`.
    #[display("malformed candidate run at cell {cell_index}: {reason}")]
    MalformedRun {
        /// The 0-based cell index of the offending run.
        cell_index: usize,
        /// A short description of what was wrong with the run.
        reason: String,
    },
}

/// An attempt to place a digit not in the target cell's candidate mask, or onto a given cell.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPlacement {
    /// The target cell is a given (clue) cell; its value is immutable.
    #[display("{cell} is a given cell and cannot be changed")]
    GivenCell {
        /// The cell that was targeted.
        cell: Cell,
    },
    /// `digit` is not currently a candidate of `cell`.
    #[display("{digit} is not a candidate of {cell}")]
    NotACandidate {
        /// The cell that was targeted.
        cell: Cell,
        /// The digit that was not a candidate.
        digit: Digit,
    },
}

/// A board consistency rule was violated after an Action was applied.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContradictionError {
    /// An unsolved cell's candidate mask became empty.
    #[display("{cell} has no remaining candidates")]
    EmptyCandidateMask {
        /// The cell whose mask became empty.
        cell: Cell,
    },
    /// A house has no empty cell left that can hold some not-yet-placed digit.
    #[display("no cell in {house} can hold {digit}")]
    NoCandidateCellsInHouse {
        /// The house with no home left for the digit.
        house: crate::house::House,
        /// The digit with nowhere to go.
        digit: Digit,
    },
    /// A peer of a filled cell still carries that cell's value as a candidate.
    #[display("{peer} still carries {digit} after {cell} was placed")]
    PeerStillCandidate {
        /// The filled cell.
        cell: Cell,
        /// Its peer that still has the value as a candidate.
        peer: Cell,
        /// The placed digit.
        digit: Digit,
    },
    /// A technique's internal combinatorial assumption was violated mid-search, indicating the
    /// board state it was searching is already inconsistent.
    #[display("a technique's candidate-count assumption was violated")]
    CandidateConstraintViolation,
}
