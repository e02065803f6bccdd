//! Fuzzy-inference cyber-attack risk predictor.
//!
//! Modular structure:
//! - [`membership`] — Triangular membership functions
//! - [`fuzzify`] — Linguistic variables, term table, fuzzification
//! - [`rules`] — Fixed ten-rule base and firing degrees
//! - [`inference`] — Winner-take-all defuzzification and the engine
//! - [`metrics`] — Mean absolute error
//! - [`dataset`] — JSON reference datasets
//! - [`report`] — Batch results and MAE verdict
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod dataset;
pub mod error;
pub mod fuzzify;
pub mod inference;
pub mod logging;
pub mod membership;
pub mod metrics;
pub mod report;
pub mod rules;

pub use config::AppConfig;
pub use dataset::Record;
pub use error::FisError;
pub use fuzzify::{fuzzify, FuzzyValues, RiskInput, Term, Variable};
pub use inference::{FisEngine, Inference};
pub use logging::StructuredLogger;
pub use membership::Triangle;
pub use metrics::mean_absolute_error;
pub use report::{Evaluation, PredictionRow, Verdict};
pub use rules::{Rule, RuleActivation, RULES};
