//! Buckets an MAE into a qualitative verdict.

use crate::config::ReportConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Good,
    Fair,
    NeedsImprovement,
}

impl Verdict {
    /// Both bounds are exclusive: an MAE equal to `good_below` is only fair.
    pub fn from_mae(mae: f64, config: &ReportConfig) -> Self {
        if mae < config.good_below {
            Verdict::Good
        } else if mae < config.fair_below {
            Verdict::Fair
        } else {
            Verdict::NeedsImprovement
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Verdict::Good => "model predicts cyber-attack risk well",
            Verdict::Fair => "model predicts cyber-attack risk fairly well",
            Verdict::NeedsImprovement => {
                "model predicts cyber-attack risk poorly and may need refinement"
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Good => "good",
            Verdict::Fair => "fair",
            Verdict::NeedsImprovement => "needs improvement",
        };
        f.write_str(s)
    }
}
