use axum::{extract::State, Json};
use rand::RngCore;
use shared::{analyze_coin_flips, compare_flip_series, Analysis};

use crate::{
    domain::{AnalysisReport, CompareResponse},
    errors::{AppError, Result},
    extractors::{FlipCount, TrialSizes},
    state::AppState,
};

/// Run flip work on the blocking pool so large counts don't stall the runtime
async fn run_flips<T, F>(state: &AppState, work: F) -> Result<T>
where
    F: FnOnce(&mut dyn RngCore) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || state.with_rng(work))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Flip task failed: {}", e)))
}

pub async fn flip(
    State(state): State<AppState>,
    FlipCount(count): FlipCount,
) -> Result<Json<Analysis>> {
    tracing::info!(count, "Flip requested");

    let analysis = run_flips(&state, move |rng| analyze_coin_flips(rng, count)).await?;

    tracing::debug!(
        heads = analysis.heads,
        tails = analysis.tails,
        "Flips counted"
    );
    metrics::counter!("flip_requests_total", "endpoint" => "flip").increment(1);
    metrics::counter!("coin_flips_total").increment(count);

    Ok(Json(analysis))
}

pub async fn analyze(
    State(state): State<AppState>,
    FlipCount(count): FlipCount,
) -> Result<Json<AnalysisReport>> {
    tracing::info!(count, "Analyze requested");

    let analysis = run_flips(&state, move |rng| analyze_coin_flips(rng, count)).await?;
    let report = AnalysisReport::from(analysis);

    tracing::debug!(
        heads = report.heads,
        tails = report.tails,
        heads_percent = report.heads_percent,
        "Flips analyzed"
    );
    metrics::counter!("flip_requests_total", "endpoint" => "analyze").increment(1);
    metrics::counter!("coin_flips_total").increment(count);

    Ok(Json(report))
}

pub async fn compare(
    State(state): State<AppState>,
    TrialSizes(trials): TrialSizes,
) -> Result<Json<CompareResponse>> {
    tracing::info!(?trials, "Compare requested");

    let series = trials.clone();
    let result = run_flips(&state, move |rng| compare_flip_series(rng, &series)).await??;

    tracing::debug!(
        max_heads = result.max_heads,
        total_heads = result.total,
        "Series compared"
    );
    metrics::counter!("flip_requests_total", "endpoint" => "compare").increment(1);
    metrics::counter!("coin_flips_total").increment(trials.iter().sum::<u64>());

    Ok(Json(CompareResponse::new(trials, result)))
}
