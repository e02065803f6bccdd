//! Structured logging: tracing subscriber setup and ndjson result lines.

mod format;

pub use format::{PredictionLine, StructuredLogger, SummaryLine};
