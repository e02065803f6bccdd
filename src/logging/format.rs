//! JSON log lines: one JSON object per line (ndjson) for per-record rows and run summaries.

use crate::report::{Evaluation, PredictionRow, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
pub struct PredictionLine<'a> {
    pub kind: &'static str,
    pub run_id: &'a str,
    #[serde(flatten)]
    pub row: &'a PredictionRow,
}

impl<'a> PredictionLine<'a> {
    pub fn new(run_id: &'a str, row: &'a PredictionRow) -> Self {
        Self {
            kind: "prediction",
            run_id,
            row,
        }
    }
}

#[derive(Serialize)]
pub struct SummaryLine<'a> {
    pub kind: &'static str,
    pub run_id: &'a str,
    pub ts: String,
    pub records: usize,
    /// Two decimals, as shown to operators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mae: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<'a> SummaryLine<'a> {
    pub fn new(eval: &'a Evaluation, verdict: Option<Verdict>) -> Self {
        let ts = DateTime::<Utc>::from_timestamp_millis(eval.generated_at)
            .unwrap_or_else(Utc::now)
            .to_rfc3339();
        Self {
            kind: "summary",
            run_id: &eval.run_id,
            ts,
            records: eval.rows.len(),
            mae: eval.mae.map(|m| format!("{:.2}", m)),
            verdict,
            message: verdict.map(Verdict::describe),
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber on stderr, level from RUST_LOG or default.
    /// Stdout is left to the report lines.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Emit a single structured line without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> io::Result<()> {
        let line = serde_json::to_string(event).map_err(io::Error::from)?;
        writeln!(w, "{}", line)
    }

    /// Every prediction row, then the summary line. Stops at the first failed write.
    pub fn emit_evaluation(
        eval: &Evaluation,
        verdict: Option<Verdict>,
        w: &mut impl Write,
    ) -> io::Result<()> {
        for row in &eval.rows {
            Self::emit_json(&PredictionLine::new(&eval.run_id, row), w)?;
        }
        Self::emit_json(&SummaryLine::new(eval, verdict), w)?;
        w.flush()
    }
}
