use serde::{Deserialize, Serialize};
use shared::{Analysis, SeriesResult};

/// Body of `/api/analyze`: the plain analysis plus outcome percentages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total: u64,
    pub heads: u64,
    pub tails: u64,
    pub max: u64,
    pub min: u64,
    pub heads_percent: f64,
    pub tails_percent: f64,
}

impl From<Analysis> for AnalysisReport {
    fn from(analysis: Analysis) -> Self {
        Self {
            total: analysis.total,
            heads: analysis.heads,
            tails: analysis.tails,
            max: analysis.max,
            min: analysis.min,
            heads_percent: analysis.heads_percent(),
            tails_percent: analysis.tails_percent(),
        }
    }
}

/// Body of `/api/compare`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub trials: Vec<u64>,
    pub max_heads: u64,
    pub total: u64,
}

impl CompareResponse {
    pub fn new(trials: Vec<u64>, result: SeriesResult) -> Self {
        Self {
            trials,
            max_heads: result.max_heads,
            total: result.total,
        }
    }
}
