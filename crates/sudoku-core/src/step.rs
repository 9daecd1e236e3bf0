//! The Step/Action model: typed, attributable records of placements and eliminations.

use crate::cell::Cell;
use crate::digit::Digit;

/// One atomic board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sets `cell`'s value to `digit`. The caller must ensure `digit` is a candidate of `cell`.
    Place {
        /// The cell to fill.
        cell: Cell,
        /// The digit to place.
        digit: Digit,
    },
    /// Removes `digit` from `cell`'s candidate mask.
    Eliminate {
        /// The cell to narrow.
        cell: Cell,
        /// The digit to remove.
        digit: Digit,
    },
}

/// The closed set of technique tags a Step/Action can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueTag {
    FullHouse,
    NakedSingle,
    HiddenSingle,
    LockedCandidates,
    NakedSubset,
    HiddenSubset,
    BasicFish,
    FinnedFish,
    FrankenFish,
    MutantFish,
    Skyscraper,
    TwoStringKite,
    RectangleElimination,
    XYWing,
    XYZWing,
    WWing,
    ForcingChain,
}

impl TechniqueTag {
    /// The name used inside `[TechniqueName]`-style explanation prefixes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullHouse => "FullHouse",
            Self::NakedSingle => "NakedSingle",
            Self::HiddenSingle => "HiddenSingle",
            Self::LockedCandidates => "LockedCandidates",
            Self::NakedSubset => "NakedSubset",
            Self::HiddenSubset => "HiddenSubset",
            Self::BasicFish => "BasicFish",
            Self::FinnedFish => "FinnedFish",
            Self::FrankenFish => "FrankenFish",
            Self::MutantFish => "MutantFish",
            Self::Skyscraper => "Skyscraper",
            Self::TwoStringKite => "TwoStringKite",
            Self::RectangleElimination => "RectangleElimination",
            Self::XYWing => "XYWing",
            Self::XYZWing => "XYZWing",
            Self::WWing => "WWing",
            Self::ForcingChain => "ForcingChain",
        }
    }
}

impl std::fmt::Display for TechniqueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A non-empty ordered list of atomic [`Step`]s, all attributed to one [`TechniqueTag`], with a
/// human-readable explanation of why they are licensed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Which technique produced this Action.
    pub technique: TechniqueTag,
    /// The steps to apply, in order.
    pub steps: Vec<Step>,
    /// A human-readable explanation referencing the houses/cells/digits that justified it.
    pub explanation: String,
}

impl Action {
    /// Builds an Action. Panics if `steps` is empty: an Action always records at least one Step.
    #[must_use]
    pub fn new(technique: TechniqueTag, steps: Vec<Step>, explanation: String) -> Self {
        assert!(!steps.is_empty(), "an Action must have at least one Step");
        Self {
            technique,
            steps,
            explanation,
        }
    }
}
