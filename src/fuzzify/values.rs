//! The nine degrees produced for one input triple.

use super::{Term, Variable};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Degrees keyed by (variable, term). Built once by [`super::fuzzify`], read-only after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyValues {
    degrees: [[f64; 3]; 3],
}

impl FuzzyValues {
    /// Exposed so rule-base tests can drive contrived degree sets.
    pub fn from_degrees(degrees: [[f64; 3]; 3]) -> Self {
        Self { degrees }
    }

    pub fn get(&self, var: Variable, term: Term) -> f64 {
        self.degrees[var.index()][term.index()]
    }

    /// `(variable, term, degree)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Term, f64)> + '_ {
        Variable::ALL.into_iter().flat_map(move |var| {
            Term::ALL
                .into_iter()
                .map(move |term| (var, term, self.get(var, term)))
        })
    }

    pub fn is_all_zero(&self) -> bool {
        self.iter().all(|(_, _, d)| d == 0.0)
    }

    /// `rc_low`, `sl_med`, `av_high`, ...
    pub fn key(var: Variable, term: Term) -> String {
        format!("{}_{}", var.short(), term.short())
    }
}

impl Serialize for FuzzyValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (var, term, degree) in self.iter() {
            map.serialize_entry(&Self::key(var, term), &degree)?;
        }
        map.end()
    }
}
