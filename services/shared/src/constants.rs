//! Shared constants for the coin-flip demo services
//!
//! Centralizes the defaults used by both the CLI and the web server so the
//! two surfaces report the same numbers for the same inputs.

/// Flip count used when the caller does not supply one (or supplies a bad one)
pub const DEFAULT_FLIP_COUNT: u64 = 100;

/// Upper bound on flips per HTTP request
///
/// Rationale: each request's flips occupy a blocking-pool thread until done,
/// so an unbounded count would let one caller hold threads indefinitely.
pub const MAX_FLIP_COUNT: u64 = 1_000_000;

/// Trial sizes compared when no series is given
pub const DEFAULT_TRIALS: [u64; 3] = [50, 100, 150];

/// Longest series accepted from an HTTP request
pub const MAX_SERIES_LENGTH: usize = 32;

/// Probability that a single flip lands heads
pub const HEADS_PROBABILITY: f64 = 0.5;

/// Default HTTP port for the web server
pub const DEFAULT_API_PORT: u16 = 8080;

/// Default port for the Prometheus metrics listener
pub const DEFAULT_METRICS_PORT: u16 = 9090;
