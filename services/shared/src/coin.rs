//! Coin flip simulation

use rand::Rng;

use crate::constants::HEADS_PROBABILITY;
use crate::types::FlipTally;

/// Flip a fair coin once
///
/// Returns true for heads, false for tails with 50% probability
pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(HEADS_PROBABILITY)
}

/// Flip a fair coin `flips` times and tally the outcomes
///
/// The tally always accounts for exactly `flips` flips.
pub fn count_flips<R: Rng + ?Sized>(rng: &mut R, flips: u64) -> FlipTally {
    let mut tally = FlipTally::default();
    for _ in 0..flips {
        tally.record(flip(rng));
    }
    tally
}
