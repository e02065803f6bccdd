//! Batch evaluation results and the MAE quality verdict.

mod verdict;

pub use verdict::Verdict;

use crate::config::ReportConfig;
use crate::fuzzify::RiskInput;
use serde::{Deserialize, Serialize};

/// Prediction for one dataset record, aligned to input order by `index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRow {
    pub index: usize,
    #[serde(flatten)]
    pub input: RiskInput,
    pub predicted: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    /// Winning rule; `None` when nothing fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<u8>,
    pub degree: f64,
}

/// Output of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub run_id: String,
    /// Unix millis
    pub generated_at: i64,
    pub rows: Vec<PredictionRow>,
    /// Over rows carrying a reference value; `None` if none do
    pub mae: Option<f64>,
}

impl Evaluation {
    pub fn predictions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.predicted).collect()
    }

    pub fn verdict(&self, config: &ReportConfig) -> Option<Verdict> {
        self.mae.map(|mae| Verdict::from_mae(mae, config))
    }

    /// Rows where no rule fired and the default prediction was used
    pub fn unfired(&self) -> impl Iterator<Item = &PredictionRow> {
        self.rows.iter().filter(|r| r.rule_id.is_none())
    }
}
