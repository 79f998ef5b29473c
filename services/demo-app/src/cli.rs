use clap::Parser;
use shared::{errors::ServiceError, DEFAULT_FLIP_COUNT, DEFAULT_TRIALS};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(version, about = "Simulate and analyze coin flips", long_about = None)]
pub struct Args {
    /// Number of coin flips to simulate
    #[arg(long, default_value_t = DEFAULT_FLIP_COUNT)]
    pub flips: u64,

    /// Mode: hello, analyze, or compare
    #[arg(long, default_value = "analyze")]
    pub mode: String,

    /// Comma-separated trial sizes for compare mode
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TRIALS.to_vec())]
    pub trials: Vec<u64>,

    /// Seed the flip generator for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hello,
    Analyze,
    Compare,
}

impl FromStr for Mode {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Mode::Hello),
            "analyze" => Ok(Mode::Analyze),
            "compare" => Ok(Mode::Compare),
            other => Err(ServiceError::invalid_mode(other)),
        }
    }
}
