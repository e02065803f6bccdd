//! Fixed rule base. Rules are data; order matters for tie-breaking.

mod table;

pub use table::{RULES, RULE_COUNT};

use crate::fuzzify::{FuzzyValues, Term, Variable};

/// One term per variable, ANDed, and a singleton consequent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub id: u8,
    pub request_count: Term,
    pub security_level: Term,
    pub anomalous_volume: Term,
    pub consequent: f64,
}

impl Rule {
    pub const fn new(
        id: u8,
        request_count: Term,
        security_level: Term,
        anomalous_volume: Term,
        consequent: f64,
    ) -> Self {
        Self {
            id,
            request_count,
            security_level,
            anomalous_volume,
            consequent,
        }
    }

    pub fn antecedents(&self) -> [(Variable, Term); 3] {
        [
            (Variable::RequestCount, self.request_count),
            (Variable::SecurityLevel, self.security_level),
            (Variable::AnomalousVolume, self.anomalous_volume),
        ]
    }

    /// Firing degree: fuzzy AND (min) over the three antecedents.
    pub fn firing_degree(&self, fv: &FuzzyValues) -> f64 {
        self.antecedents()
            .into_iter()
            .map(|(var, term)| fv.get(var, term))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn activate(&self, fv: &FuzzyValues) -> RuleActivation {
        RuleActivation {
            rule_id: self.id,
            degree: self.firing_degree(fv),
            consequent: self.consequent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleActivation {
    pub rule_id: u8,
    pub degree: f64,
    pub consequent: f64,
}

/// All ten activations, in rule order.
pub fn evaluate(fv: &FuzzyValues) -> [RuleActivation; RULE_COUNT] {
    RULES.map(|rule| rule.activate(fv))
}

/// Rules with degree strictly above zero, rule order preserved.
pub fn active(fv: &FuzzyValues) -> Vec<RuleActivation> {
    evaluate(fv)
        .into_iter()
        .filter(|act| act.degree > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzify::{fuzzify, RiskInput};
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    fn fuzzy_values() -> impl Strategy<Value = FuzzyValues> {
        proptest::array::uniform9(0f64..=1.0).prop_map(|d| {
            FuzzyValues::from_degrees([[d[0], d[1], d[2]], [d[3], d[4], d[5]], [d[6], d[7], d[8]]])
        })
    }

    proptest! {
        #[test]
        fn degree_is_min_of_antecedents(fv in fuzzy_values()) {
            for (rule, act) in RULES.iter().zip(evaluate(&fv)) {
                let expected = rule
                    .antecedents()
                    .iter()
                    .map(|(v, t)| fv.get(*v, *t))
                    .fold(1.0, f64::min);
                prop_assert_eq!(act.degree, expected, "rule {}", rule.id);
                prop_assert!((0.0..=1.0).contains(&act.degree));
                prop_assert_eq!(act.consequent, rule.consequent);
            }
        }

        #[test]
        fn active_is_ordered_subset(fv in fuzzy_values()) {
            let acts = active(&fv);
            prop_assert!(acts.iter().all(|a| a.degree > 0.0));
            prop_assert!(acts.windows(2).all(|w| w[0].rule_id < w[1].rule_id));
        }
    }

    #[test]
    fn only_rule_one_fires_for_low_input() {
        let acts = active(&fuzzify(&RiskInput::new(200.0, 3.0, 50.0)));
        assert_eq!(acts.len(), 1);
        assert_eq!(acts[0].rule_id, 1);
        assert!((acts[0].degree - 0.4).abs() < EPS);
        assert_eq!(acts[0].consequent, 30.0);
    }

    #[test]
    fn duplicate_rules_fire_together() {
        let acts = active(&fuzzify(&RiskInput::new(900.0, 1.0, 400.0)));
        let ids: Vec<u8> = acts.iter().map(|a| a.rule_id).collect();
        assert_eq!(ids, vec![4, 6]);
        assert_eq!(acts[0].degree, acts[1].degree);
        assert!((acts[0].degree - 0.6).abs() < EPS);
    }

    #[test]
    fn active_list_keeps_rule_order() {
        // (700, 3, 300) lights rules 2, 4, 6 and 9
        let acts = active(&fuzzify(&RiskInput::new(700.0, 3.0, 300.0)));
        let ids: Vec<u8> = acts.iter().map(|a| a.rule_id).collect();
        assert_eq!(ids, vec![2, 4, 6, 9]);
        assert!(acts.iter().all(|a| a.degree > 0.0));
    }

    #[test]
    fn nothing_fires_on_all_zero_degrees() {
        let fv = FuzzyValues::from_degrees([[0.0; 3]; 3]);
        assert!(active(&fv).is_empty());
        assert_eq!(evaluate(&fv).len(), 10);
    }
}
