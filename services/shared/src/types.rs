//! Value types produced by the flip counter and the aggregators
//!
//! All of these are plain data: created per call, owned by the caller, and
//! serialised as-is by the web server.
use serde::{Deserialize, Serialize};

/// Outcome counts of one run of flips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipTally {
    pub heads: u64,
    pub tails: u64,
}

impl FlipTally {
    /// Number of flips recorded in this tally
    pub fn flips(&self) -> u64 {
        self.heads + self.tails
    }

    /// Record one flip; `true` is heads
    pub fn record(&mut self, heads: bool) {
        if heads {
            self.heads += 1;
        } else {
            self.tails += 1;
        }
    }
}

/// Summary statistics derived from a [`FlipTally`]
///
/// Field order matches the JSON shape returned by `/api/flip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub total: u64,
    pub heads: u64,
    pub tails: u64,
    pub max: u64,
    pub min: u64,
}

impl Analysis {
    /// Share of heads as a percentage of `total`
    pub fn heads_percent(&self) -> f64 {
        percent_of(self.heads, self.total)
    }

    /// Share of tails as a percentage of `total`
    pub fn tails_percent(&self) -> f64 {
        percent_of(self.tails, self.total)
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Reduction of several trials to their overall heads statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub max_heads: u64,
    pub total: u64,
}
