//! Base-seed resolution and per-trial generator derivation
//!
//! Every engine run resolves one base seed, then derives an independent
//! generator per trial by offsetting the base seed with the trial index.
//! Trial `i` sees the same random stream for a given base seed no matter
//! which thread runs it or in what order, which is what makes seeded runs
//! reproducible across sequential and parallel execution.

use rand::prelude::*;

/// Resolve the base seed for a run.
///
/// A caller-supplied seed is used as-is; otherwise a fresh seed is drawn
/// from process entropy, so unseeded runs differ from each other.
pub fn resolve_base_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| thread_rng().gen())
}

/// Derive the generator for a single trial.
pub fn trial_rng(base_seed: u64, trial: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64))
}
