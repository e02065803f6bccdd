//! Linguistic variables and fuzzification of raw input triples.

mod values;

pub use values::FuzzyValues;

use crate::membership::Triangle;
use serde::{Deserialize, Serialize};

/// Raw input triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub request_count: f64,
    pub security_level: f64,
    pub anomalous_volume: f64,
}

impl RiskInput {
    pub fn new(request_count: f64, security_level: f64, anomalous_volume: f64) -> Self {
        Self {
            request_count,
            security_level,
            anomalous_volume,
        }
    }

    pub fn value(&self, var: Variable) -> f64 {
        match var {
            Variable::RequestCount => self.request_count,
            Variable::SecurityLevel => self.security_level,
            Variable::AnomalousVolume => self.anomalous_volume,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    RequestCount,
    SecurityLevel,
    AnomalousVolume,
}

impl Variable {
    pub const ALL: [Variable; 3] = [
        Variable::RequestCount,
        Variable::SecurityLevel,
        Variable::AnomalousVolume,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key prefix used when naming degrees (`rc`, `sl`, `av`).
    pub const fn short(self) -> &'static str {
        match self {
            Variable::RequestCount => "rc",
            Variable::SecurityLevel => "sl",
            Variable::AnomalousVolume => "av",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Low, Term::Medium, Term::High];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn short(self) -> &'static str {
        match self {
            Term::Low => "low",
            Term::Medium => "med",
            Term::High => "high",
        }
    }
}

/// Term curves per variable, indexed `[variable][term]`.
pub const MEMBERSHIP: [[Triangle; 3]; 3] = [
    // request_count
    [
        Triangle::new(0.0, 0.0, 500.0),
        Triangle::new(250.0, 500.0, 750.0),
        Triangle::new(500.0, 1000.0, 1000.0),
    ],
    // security_level
    [
        Triangle::new(0.0, 0.0, 5.0),
        Triangle::new(2.0, 5.0, 8.0),
        Triangle::new(5.0, 10.0, 10.0),
    ],
    // anomalous_volume
    [
        Triangle::new(0.0, 0.0, 250.0),
        Triangle::new(100.0, 250.0, 400.0),
        Triangle::new(250.0, 500.0, 500.0),
    ],
];

pub fn membership(var: Variable, term: Term) -> Triangle {
    MEMBERSHIP[var.index()][term.index()]
}

/// Evaluates all nine term curves independently. Terms are not normalised.
pub fn fuzzify(input: &RiskInput) -> FuzzyValues {
    let mut degrees = [[0.0; 3]; 3];
    for var in Variable::ALL {
        let x = input.value(var);
        for term in Term::ALL {
            degrees[var.index()][term.index()] = membership(var, term).degree(x);
        }
    }
    FuzzyValues::from_degrees(degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn low_risk_input() {
        let fv = fuzzify(&RiskInput::new(200.0, 3.0, 50.0));
        assert!((fv.get(Variable::RequestCount, Term::Low) - 0.6).abs() < EPS);
        assert!((fv.get(Variable::SecurityLevel, Term::Low) - 0.4).abs() < EPS);
        assert!((fv.get(Variable::AnomalousVolume, Term::Low) - 0.8).abs() < EPS);
        assert_eq!(fv.get(Variable::RequestCount, Term::Medium), 0.0);
        assert_eq!(fv.get(Variable::RequestCount, Term::High), 0.0);
        assert_eq!(fv.get(Variable::AnomalousVolume, Term::Medium), 0.0);
        assert_eq!(fv.get(Variable::AnomalousVolume, Term::High), 0.0);
        assert_eq!(fv.get(Variable::SecurityLevel, Term::High), 0.0);
        // medium security overlaps low at 3
        assert!((fv.get(Variable::SecurityLevel, Term::Medium) - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn high_risk_input() {
        let fv = fuzzify(&RiskInput::new(900.0, 1.0, 400.0));
        assert!((fv.get(Variable::RequestCount, Term::High) - 0.8).abs() < EPS);
        assert!((fv.get(Variable::SecurityLevel, Term::Low) - 0.8).abs() < EPS);
        assert!((fv.get(Variable::AnomalousVolume, Term::High) - 0.6).abs() < EPS);
        assert_eq!(fv.get(Variable::AnomalousVolume, Term::Medium), 0.0);
    }

    #[test]
    fn terms_may_leave_gaps() {
        // 5 sits on the foot of low and high and the peak of medium
        let fv = fuzzify(&RiskInput::new(0.0, 5.0, 0.0));
        assert_eq!(fv.get(Variable::SecurityLevel, Term::Low), 0.0);
        assert_eq!(fv.get(Variable::SecurityLevel, Term::Medium), 1.0);
        assert_eq!(fv.get(Variable::SecurityLevel, Term::High), 0.0);
        assert!(fv.iter().all(|(_, _, d)| (0.0..=1.0).contains(&d)));
    }

    #[test]
    fn out_of_domain_inputs_are_accepted() {
        let fv = fuzzify(&RiskInput::new(-5.0, 42.0, 1e6));
        assert!(fv.is_all_zero());
    }
}
