//! The three CLI modes. Each writes its report to `out`; logs go through tracing.

use rand::Rng;
use shared::{
    analyze_coin_flips, errors::ServiceError, greeting, summarize_series, Analysis, SeriesResult,
};
use std::io::Write;

pub fn run_hello(out: &mut impl Write) -> anyhow::Result<()> {
    tracing::info!("Running hello mode");

    writeln!(out, "{}", greeting::alpha_greeting())?;
    for line in greeting::beta_greetings() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn run_analyze<R: Rng + ?Sized>(
    rng: &mut R,
    flips: u64,
    out: &mut impl Write,
) -> anyhow::Result<Analysis> {
    tracing::info!(flips, "Running analyze mode");

    let analysis = analyze_coin_flips(rng, flips);
    tracing::info!(
        heads = analysis.heads,
        tails = analysis.tails,
        "Analysis complete"
    );

    writeln!(out, "\n=== Coin Flip Analysis ===")?;
    writeln!(out, "Total Flips: {}", analysis.total)?;
    writeln!(out, "Heads: {}", analysis.heads)?;
    writeln!(out, "Tails: {}", analysis.tails)?;
    writeln!(out, "Max: {}", analysis.max)?;
    writeln!(out, "Min: {}", analysis.min)?;

    Ok(analysis)
}

/// Print each trial's split, then the overall statistics over those same trials
pub fn run_compare<R: Rng + ?Sized>(
    rng: &mut R,
    trials: &[u64],
    out: &mut impl Write,
) -> anyhow::Result<SeriesResult> {
    tracing::info!(?trials, "Running compare mode");

    writeln!(out, "\n=== Comparing Multiple Flip Series ===")?;

    let mut heads = Vec::with_capacity(trials.len());
    for &trial in trials {
        let analysis = analyze_coin_flips(rng, trial);
        writeln!(out, "\nTrial with {} flips:", trial)?;
        writeln!(out, "  Heads: {}, Tails: {}", analysis.heads, analysis.tails)?;
        heads.push(analysis.heads);
    }

    let result = summarize_series(&heads).map_err(ServiceError::from)?;

    writeln!(out, "\nOverall Statistics:")?;
    writeln!(out, "  Max Heads: {}", result.max_heads)?;
    writeln!(out, "  Total Heads: {}", result.total)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use shared::errors::ErrorCode;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_hello_output() {
        let mut buf = Vec::new();
        run_hello(&mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("Hello from alpha!"));
        assert!(text.contains("Hello from beta!"));
    }

    #[test]
    fn test_analyze_output() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut buf = Vec::new();
        let analysis = run_analyze(&mut rng, 100, &mut buf).unwrap();

        assert_eq!(analysis.total, 100);
        assert_eq!(analysis.heads + analysis.tails, 100);

        let text = output(buf);
        assert!(text.contains("=== Coin Flip Analysis ==="));
        assert!(text.contains("Total Flips: 100"));
        assert!(text.contains(&format!("Heads: {}", analysis.heads)));
        assert!(text.contains(&format!("Min: {}", analysis.min)));
    }

    #[test]
    fn test_compare_output_is_consistent() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut buf = Vec::new();
        let result = run_compare(&mut rng, &[50, 100, 150], &mut buf).unwrap();

        let text = output(buf);
        let trial_heads: Vec<u64> = text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("Heads: "))
            .map(|rest| rest.split(',').next().unwrap().parse().unwrap())
            .collect();

        assert_eq!(trial_heads.len(), 3);
        assert_eq!(result.total, trial_heads.iter().sum::<u64>());
        assert_eq!(result.max_heads, *trial_heads.iter().max().unwrap());
        assert!(text.contains(&format!("Total Heads: {}", result.total)));
    }

    #[test]
    fn test_compare_empty_trials() {
        let mut buf = Vec::new();
        let error = run_compare(&mut rand::thread_rng(), &[], &mut buf).unwrap_err();

        let service_error = error.downcast::<ServiceError>().unwrap();
        assert_eq!(
            service_error.code,
            ErrorCode::VALIDATION_EMPTY_TRIAL_SET.as_str()
        );
    }
}
