//! Reference datasets: JSON arrays of input triples with optional actual risk.

use crate::error::FisError;
use crate::fuzzify::RiskInput;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One dataset row. `actual` is the reference risk level, when known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub input: RiskInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
}

impl Record {
    pub fn new(input: RiskInput, actual: impl Into<Option<f64>>) -> Self {
        Self {
            input,
            actual: actual.into(),
        }
    }
}

pub fn parse(json: &str) -> Result<Vec<Record>, FisError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a dataset file. Unlike config, a missing or malformed dataset is an error.
pub fn load(path: &Path) -> Result<Vec<Record>, FisError> {
    let data = std::fs::read_to_string(path)?;
    let records = parse(&data)?;
    debug!(path = %path.display(), count = records.len(), "dataset loaded");
    Ok(records)
}
