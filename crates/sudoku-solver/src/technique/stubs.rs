//! Named but unimplemented techniques.
//!
//! These are documented gaps, not half-built code: the closed `TechniqueTag` set has no
//! variants for them, so none of these types implement [`super::traits::Technique`] and none
//! are registered. Implementing them well enough to trust their output needs a fuller chain
//! representation (for forcing nets) or a richer locked-set model (for ALS) than this crate
//! currently has; left for a future pass rather than guessed at.

/// A fish search that also allows one candidate cell per base house to be a "fin of fins"
/// resolved by a nested hypothesis, rather than the direct sight-of-all-fins rule
/// [`super::fish::Fish`] implements for ordinary Finned fish.
#[derive(Debug)]
pub struct KrakenFish;

/// Eliminations licensed by an Almost Locked Set (an `n`-cell group restricted to `n + 1`
/// candidates) interacting with a conjugate pair or another ALS.
#[derive(Debug)]
pub struct AlmostLockedCandidates;

/// A two-strong-link chain like Skyscraper / 2-String Kite but threaded through a third house,
/// unifying the two under one search instead of two dedicated ones.
#[derive(Debug)]
pub struct TurbotFish;

/// A forcing chain generalized to a net: multiple starting hypotheses (not necessarily the two
/// candidates of one cell) whose propagation all agree on a placement or elimination.
#[derive(Debug)]
pub struct ForcingNet;
