//! Input triple → fuzzify → rule base → winner-take-all → prediction.

use super::defuzzify::{select, NO_FIRE_PREDICTION};
use crate::dataset::Record;
use crate::error::FisError;
use crate::fuzzify::{fuzzify, FuzzyValues, RiskInput};
use crate::metrics::mean_absolute_error;
use crate::report::{Evaluation, PredictionRow};
use crate::rules::{self, RuleActivation};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Full trace of one prediction
#[derive(Debug, Clone)]
pub struct Inference {
    pub fuzzy: FuzzyValues,
    pub active: Vec<RuleActivation>,
    pub selected: Option<RuleActivation>,
    pub prediction: f64,
}

/// Stateless; the membership and rule tables are compile-time constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct FisEngine;

impl FisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn infer(&self, input: &RiskInput) -> Inference {
        let fuzzy = fuzzify(input);
        let active = rules::active(&fuzzy);
        let selected = select(&active);
        let prediction = selected.map_or(NO_FIRE_PREDICTION, |act| act.consequent);

        debug!(
            request_count = input.request_count,
            security_level = input.security_level,
            anomalous_volume = input.anomalous_volume,
            fuzzy = %serde_json::to_string(&fuzzy).unwrap_or_default(),
            active = active.len(),
            rule_id = selected.map(|a| a.rule_id),
            prediction,
            "inference"
        );

        Inference {
            fuzzy,
            active,
            selected,
            prediction,
        }
    }

    pub fn predict(&self, input: &RiskInput) -> f64 {
        self.infer(input).prediction
    }

    /// Predict every record in order and score against the ones with a reference.
    pub fn evaluate(&self, records: &[Record]) -> Result<Evaluation, FisError> {
        if records.is_empty() {
            return Err(FisError::invalid_input("empty dataset"));
        }

        let rows: Vec<PredictionRow> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let inf = self.infer(&record.input);
                if inf.selected.is_none() {
                    warn!(index, "no rule fired; using default prediction");
                }
                PredictionRow {
                    index,
                    input: record.input,
                    predicted: inf.prediction,
                    actual: record.actual,
                    rule_id: inf.selected.map(|a| a.rule_id),
                    degree: inf.selected.map_or(0.0, |a| a.degree),
                }
            })
            .collect();

        let (predicted, actual): (Vec<f64>, Vec<f64>) = rows
            .iter()
            .filter_map(|r| r.actual.map(|a| (r.predicted, a)))
            .unzip();
        let mae = if actual.is_empty() {
            None
        } else {
            Some(mean_absolute_error(&predicted, &actual)?)
        };

        info!(records = rows.len(), scored = actual.len(), mae, "evaluation complete");

        Ok(Evaluation {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().timestamp_millis(),
            rows,
            mae,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn low_risk_selects_rule_one() {
        let inf = FisEngine::new().infer(&RiskInput::new(200.0, 3.0, 50.0));
        let selected = inf.selected.unwrap();
        assert_eq!(selected.rule_id, 1);
        assert!((selected.degree - 0.4).abs() < EPS);
        assert_eq!(inf.prediction, 30.0);
    }

    #[test]
    fn tie_between_duplicates_goes_to_rule_four() {
        let engine = FisEngine::new();
        let inf = engine.infer(&RiskInput::new(900.0, 1.0, 400.0));
        assert_eq!(inf.active.len(), 2);
        assert_eq!(inf.selected.map(|a| a.rule_id), Some(4));
        assert_eq!(engine.predict(&RiskInput::new(900.0, 1.0, 400.0)), 95.0);
    }

    #[test]
    fn no_fire_predicts_zero() {
        let inf = FisEngine::new().infer(&RiskInput::new(250.0, 5.0, 80.0));
        assert!(inf.active.is_empty());
        assert!(inf.selected.is_none());
        assert_eq!(inf.prediction, 0.0);
    }

    #[test]
    fn evaluate_skips_missing_references_in_mae() {
        let records = [
            Record::new(RiskInput::new(200.0, 3.0, 50.0), 40.0),
            Record::new(RiskInput::new(900.0, 1.0, 400.0), None),
        ];
        let eval = FisEngine::new().evaluate(&records).unwrap();
        assert_eq!(eval.predictions(), vec![30.0, 95.0]);
        assert_eq!(eval.mae, Some(10.0));
        assert_eq!(eval.rows[1].actual, None);
    }

    #[test]
    fn evaluate_without_references_has_no_mae() {
        let records = [Record::new(RiskInput::new(200.0, 3.0, 50.0), None)];
        let eval = FisEngine::new().evaluate(&records).unwrap();
        assert_eq!(eval.mae, None);
        assert_eq!(eval.verdict(&Default::default()), None);
    }

    #[test]
    fn evaluate_empty_is_invalid() {
        assert!(FisEngine::new().evaluate(&[]).unwrap_err().is_invalid_input());
    }
}
