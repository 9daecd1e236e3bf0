//! The nine Sudoku digits and the packed set of them.

use crate::bitset::BitSet9;
use crate::index::Index9Semantics;

/// One of the nine Sudoku digits, `1`..=`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    D1 = 1,
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D5 = 5,
    D6 = 6,
    D7 = 7,
    D8 = 8,
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Builds a digit from its numeric value `1..=9`. Panics outside that range.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("digit value out of range 1..=9"),
        }
    }

    /// The numeric value `1..=9`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

/// [`Index9Semantics`] mapping digits `1..=9` onto dense indices `0..9`.
#[derive(Debug, Clone, Copy)]
pub struct DigitSemantics;

impl Index9Semantics for DigitSemantics {
    type Value = Digit;

    fn to_index(value: Digit) -> u8 {
        value.value() - 1
    }

    fn from_index(index: u8) -> Digit {
        Digit::from_value(index + 1)
    }
}

/// A packed set of digits.
pub type DigitSet = BitSet9<DigitSemantics>;
