//! Winner-take-all defuzzification.
//!
//! This is hard rule selection, not the degree-weighted average of textbook
//! Sugeno inference: the single strongest rule's consequent is the output.

use crate::rules::RuleActivation;

/// Returned when no rule fires.
pub const NO_FIRE_PREDICTION: f64 = 0.0;

/// Strongest activation. Only a strictly greater degree replaces the
/// current best, so among equal degrees the earliest rule wins.
pub fn select(active: &[RuleActivation]) -> Option<RuleActivation> {
    active.iter().copied().fold(None, |best, act| match best {
        Some(b) if act.degree <= b.degree => Some(b),
        _ => Some(act),
    })
}

pub fn defuzzify(active: &[RuleActivation]) -> f64 {
    select(active).map_or(NO_FIRE_PREDICTION, |act| act.consequent)
}
