//! Every concrete technique, plus the default dispatch order a solver searches them in.

pub mod fish;
pub mod forcing_chain;
pub mod full_house;
pub mod locked_candidates;
pub mod single_digit_patterns;
pub mod singles;
pub mod stubs;
pub mod subset;
pub mod traits;
pub mod wings;

pub use traits::{BoxedTechnique, Technique};

use fish::{Fish, FishVariant};
use forcing_chain::ForcingChain;
use full_house::FullHouse;
use locked_candidates::LockedCandidates;
use single_digit_patterns::{RectangleElimination, Skyscraper, TwoStringKite};
use singles::{HiddenSingle, NakedSingle};
use subset::{HiddenSubset, NakedSubset};
use wings::{WWing, XyWing, XyzWing};

/// The techniques a solver tries, in order, from cheapest/most-obvious to most exotic. Each
/// `find_action` call only ever searches; nothing here mutates the board.
#[must_use]
pub fn default_registry() -> Vec<BoxedTechnique> {
    vec![
        Box::new(FullHouse::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedSingle::new()),
        Box::new(LockedCandidates::new()),
        Box::new(NakedSubset::new(4)),
        Box::new(HiddenSubset::new(4)),
        Box::new(Fish::new(FishVariant::Basic)),
        Box::new(Skyscraper::new()),
        Box::new(TwoStringKite::new()),
        Box::new(RectangleElimination::new()),
        Box::new(XyWing::new()),
        Box::new(XyzWing::new()),
        Box::new(WWing::new()),
        Box::new(Fish::new(FishVariant::Finned)),
        Box::new(Fish::new(FishVariant::Franken)),
        Box::new(Fish::new(FishVariant::Mutant)),
        Box::new(ForcingChain::new()),
    ]
}
