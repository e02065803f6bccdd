use super::Rule;
use crate::fuzzify::Term::{High, Low, Medium};

pub const RULE_COUNT: usize = 10;

/// Columns: request_count, security_level, anomalous_volume, consequent.
///
/// Rules 3/7, 4/6 and 5/10 share antecedents. Whichever comes first always
/// wins the tie, so 6, 7 and 10 can never be selected. Kept as-is so
/// predictions stay stable.
pub const RULES: [Rule; RULE_COUNT] = [
    Rule::new(1, Low, Low, Low, 30.0),
    Rule::new(2, Medium, Low, Medium, 60.0),
    Rule::new(3, Low, High, Low, 20.0),
    Rule::new(4, High, Low, High, 95.0),
    Rule::new(5, Medium, Medium, Low, 40.0),
    Rule::new(6, High, Low, High, 85.0),
    Rule::new(7, Low, High, Low, 10.0),
    Rule::new(8, Medium, High, Low, 50.0),
    Rule::new(9, High, Medium, High, 90.0),
    Rule::new(10, Medium, Medium, Low, 35.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_positional() {
        for (i, rule) in RULES.iter().enumerate() {
            assert_eq!(rule.id as usize, i + 1);
        }
    }

    #[test]
    fn duplicated_antecedents_are_preserved() {
        let pattern = |r: &Rule| (r.request_count, r.security_level, r.anomalous_volume);
        for (first, second) in [(3, 7), (4, 6), (5, 10)] {
            assert_eq!(pattern(&RULES[first - 1]), pattern(&RULES[second - 1]));
            assert_ne!(RULES[first - 1].consequent, RULES[second - 1].consequent);
        }
    }
}
