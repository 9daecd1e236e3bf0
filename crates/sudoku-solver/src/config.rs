//! Resource limits and cooperative cancellation for a solve.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Default Forcing Chain propagation depth cap.
pub const DEFAULT_FORCING_CHAIN_DEPTH: usize = 64;

/// Default subset/fish size cap (Naked/Hidden Subset, Fish families all search sizes `2..=N`).
pub const DEFAULT_SIZE_CAP: usize = 4;

/// Resource limits and the cooperative abort flag threaded through a solve.
///
/// The engine never spawns threads or suspends; `abort` is polled between technique
/// invocations, between subset/fish enumeration batches, and (for Forcing Chain) between
/// propagation steps. Setting it from another thread is how a caller enforces a timeout.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Maximum Forcing Chain propagation depth before giving up on a branch.
    pub forcing_chain_depth: usize,
    /// Maximum subset/fish size searched (Naked/Hidden Subset, all Fish variants).
    pub size_cap: usize,
    abort: Option<Arc<AtomicBool>>,
}

impl SolveConfig {
    /// Default limits, no abort flag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forcing_chain_depth: DEFAULT_FORCING_CHAIN_DEPTH,
            size_cap: DEFAULT_SIZE_CAP,
            abort: None,
        }
    }

    /// Attaches a cooperative abort flag; the solve loop and the long-running techniques poll
    /// it and bail out to "unsolved, no mutation" once it is set.
    #[must_use]
    pub fn with_abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.abort = Some(flag);
        self
    }

    /// Whether the abort flag (if any) is currently set.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.abort.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}
