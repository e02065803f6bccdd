//! Runtime configuration for the batch evaluator. Model tables are fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::error::FisError;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON dataset to evaluate
    pub dataset_path: PathBuf,
    /// MAE verdict thresholds
    pub report: ReportConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// MAE strictly below this is a good fit
    pub good_below: f64,
    /// MAE strictly below this (and not good) is a fair fit
    pub fair_below: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/sample_dataset.json"),
            report: ReportConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            good_below: 10.0,
            fair_below: 20.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default.
    /// An unreadable or malformed file also falls back to default, with a warning.
    pub fn load(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(FisError::from)
            .and_then(|data| Ok(serde_json::from_str::<AppConfig>(&data)?));
        match parsed {
            Ok(c) => c,
            Err(error) => {
                warn!(path = %path.display(), %error, "config unusable; using defaults");
                Self::default()
            }
        }
    }
}
