//! Aggregation of flip tallies into summary statistics

use rand::Rng;
use thiserror::Error;

use crate::coin::count_flips;
use crate::math;
use crate::types::{Analysis, FlipTally, SeriesResult};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlipError {
    #[error("Trial set is empty: at least one trial size is required")]
    EmptyTrialSet,
}

/// Derive summary statistics from a tally
///
/// `total` is the requested `limit`, not a recount of the tally. A correct
/// counter always makes the two agree; a mismatch trips the debug assertion.
pub fn analyze_tally(tally: FlipTally, limit: u64) -> Analysis {
    debug_assert_eq!(
        tally.flips(),
        limit,
        "tally covers {} flips but {} were requested",
        tally.flips(),
        limit
    );

    Analysis {
        total: limit,
        heads: tally.heads,
        tails: tally.tails,
        max: math::max(tally.heads, tally.tails),
        min: math::min(tally.heads, tally.tails),
    }
}

/// Flip `limit` coins and summarize the outcome
pub fn analyze_coin_flips<R: Rng + ?Sized>(rng: &mut R, limit: u64) -> Analysis {
    analyze_tally(count_flips(rng, limit), limit)
}

/// Reduce per-trial heads counts to their maximum and sum
pub fn summarize_series(heads: &[u64]) -> Result<SeriesResult, FlipError> {
    let max_heads = heads
        .iter()
        .copied()
        .reduce(math::max)
        .ok_or(FlipError::EmptyTrialSet)?;

    Ok(SeriesResult {
        max_heads,
        total: math::sum(heads),
    })
}

/// Run one flip series per trial size and compare their heads counts
///
/// Trials run in the given order; entropy consumed is proportional to the sum
/// of the trial sizes.
pub fn compare_flip_series<R: Rng + ?Sized>(
    rng: &mut R,
    trials: &[u64],
) -> Result<SeriesResult, FlipError> {
    if trials.is_empty() {
        return Err(FlipError::EmptyTrialSet);
    }

    let heads: Vec<u64> = trials
        .iter()
        .map(|&trial| count_flips(rng, trial).heads)
        .collect();

    summarize_series(&heads)
}
