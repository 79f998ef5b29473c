use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use shared::{DEFAULT_TRIALS, MAX_SERIES_LENGTH};
use std::convert::Infallible;

use crate::{config::FlipConfig, state::AppState};

#[derive(Debug, Deserialize)]
struct CountQuery {
    count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrialsQuery {
    trials: Option<String>,
}

/// Flip count taken from the `count` query parameter
///
/// Never rejects: a count that is missing, non-numeric, zero, or above the
/// configured maximum becomes the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipCount(pub u64);

#[async_trait]
impl FromRequestParts<AppState> for FlipCount {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = Query::<CountQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.count);

        Ok(FlipCount(resolve_count(raw.as_deref(), &state.config.flips)))
    }
}

/// Trial sizes taken from the comma-separated `trials` query parameter
///
/// Falls back to the default series when the list is missing, empty, too
/// long, or has any entry that is not a positive integer within the
/// configured maximum count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSizes(pub Vec<u64>);

#[async_trait]
impl FromRequestParts<AppState> for TrialSizes {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = Query::<TrialsQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.trials);

        Ok(TrialSizes(resolve_trials(raw.as_deref(), &state.config.flips)))
    }
}

pub fn resolve_count(raw: Option<&str>, flips: &FlipConfig) -> u64 {
    match raw.map(|value| value.parse::<u64>()) {
        Some(Ok(count)) if (1..=flips.max_count).contains(&count) => count,
        Some(_) => {
            tracing::debug!(
                raw_count = raw.unwrap_or_default(),
                default_count = flips.default_count,
                "Unusable count, substituting default"
            );
            flips.default_count
        }
        None => flips.default_count,
    }
}

pub fn resolve_trials(raw: Option<&str>, flips: &FlipConfig) -> Vec<u64> {
    let parsed: Option<Vec<u64>> = raw.and_then(|value| {
        value
            .split(',')
            .map(|part| match part.trim().parse::<u64>() {
                Ok(trial) if (1..=flips.max_count).contains(&trial) => Some(trial),
                _ => None,
            })
            .collect()
    });

    match parsed {
        Some(trials) if !trials.is_empty() && trials.len() <= MAX_SERIES_LENGTH => trials,
        _ => {
            if raw.is_some() {
                tracing::debug!(
                    raw_trials = raw.unwrap_or_default(),
                    "Unusable trial list, substituting default series"
                );
            }
            DEFAULT_TRIALS.to_vec()
        }
    }
}
