pub mod analysis;
pub mod coin;
pub mod constants;
pub mod errors;
pub mod greeting;
pub mod math;
pub mod types;

pub use analysis::{
    analyze_coin_flips, analyze_tally, compare_flip_series, summarize_series, FlipError,
};
pub use coin::count_flips;
pub use constants::*;
pub use types::*;
