//! Zero-cost index conversions between domain values and dense bit positions.
//!
//! [`BitSet9`](crate::bitset::BitSet9) and [`BitSet81`](crate::bitset::BitSet81) are generic over
//! a *semantics* marker type that says how a domain value (a [`Digit`](crate::digit::Digit), a
//! cell index) maps onto the dense `0..9` / `0..81` range the underlying integer actually
//! stores. This lets one bitset implementation back both `DigitSet` and `CellSet` without
//! duplicating the popcount/iteration machinery.

/// Maps a domain value onto a dense index in `0..9` and back.
pub trait Index9Semantics {
    /// The domain value this semantics maps (e.g. [`Digit`](crate::digit::Digit)).
    type Value: Copy;

    /// Maps a domain value to its dense index. Panics if the value is out of range.
    fn to_index(value: Self::Value) -> u8;

    /// Maps a dense index back to a domain value. Panics if `index >= 9`.
    fn from_index(index: u8) -> Self::Value;
}

/// Maps a domain value onto a dense index in `0..81` and back.
pub trait Index81Semantics {
    /// The domain value this semantics maps (e.g. a cell index).
    type Value: Copy;

    /// Maps a domain value to its dense index. Panics if the value is out of range.
    fn to_index(value: Self::Value) -> u8;

    /// Maps a dense index back to a domain value. Panics if `index >= 81`.
    fn from_index(index: u8) -> Self::Value;
}
