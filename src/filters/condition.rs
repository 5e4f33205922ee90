//! Typed numeric comparison conditions and their evaluation.

use serde::{Deserialize, Serialize};

/// Comparison operator for a numeric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
    Gt,
    Gte,
    Eq,
    Lte,
    Lt,
    Between,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
            Comparator::Eq => "eq",
            Comparator::Lte => "lte",
            Comparator::Lt => "lt",
            Comparator::Between => "between",
        }
    }

    /// Parse a wire-format operator. Unknown operators yield `None`:
    /// a condition that cannot be constructed behaves exactly like the
    /// absent condition it would have evaluated to anyway.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gt" => Some(Comparator::Gt),
            "gte" => Some(Comparator::Gte),
            "eq" => Some(Comparator::Eq),
            "lte" => Some(Comparator::Lte),
            "lt" => Some(Comparator::Lt),
            "between" => Some(Comparator::Between),
            _ => None,
        }
    }

    /// Display symbol for filter summaries.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Gte => "≥",
            Comparator::Eq => "=",
            Comparator::Lte => "≤",
            Comparator::Lt => "<",
            Comparator::Between => "between",
        }
    }
}

/// A single-field numeric filter: operator plus one or two operands.
///
/// `value2` is meaningful only for `Between` and ignored otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericCondition {
    pub op: Comparator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value2: Option<f64>,
}

impl NumericCondition {
    pub fn new(op: Comparator, value: f64) -> Self {
        Self {
            op,
            value: Some(value),
            value2: None,
        }
    }

    pub fn between(lo: f64, hi: f64) -> Self {
        Self {
            op: Comparator::Between,
            value: Some(lo),
            value2: Some(hi),
        }
    }

    /// True when the required operand(s) are missing or NaN. Editing
    /// paths clear empty conditions instead of keeping them around.
    pub fn is_empty(&self) -> bool {
        let missing = |v: Option<f64>| v.map_or(true, f64::is_nan);
        match self.op {
            Comparator::Between => missing(self.value) || missing(self.value2),
            _ => missing(self.value),
        }
    }

    /// `None` for empty conditions, per the incomplete-input policy.
    pub fn normalized(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Short human-readable form, e.g. `≥ 1000` or `5 – 10`.
    pub fn describe(&self) -> String {
        match self.op {
            Comparator::Between => match (self.value, self.value2) {
                (Some(a), Some(b)) => format!("{} – {}", a, b),
                _ => "between ?".to_string(),
            },
            op => match self.value {
                Some(v) => format!("{} {}", op.symbol(), v),
                None => format!("{} ?", op.symbol()),
            },
        }
    }
}

/// Evaluate a numeric condition against an optional value.
///
/// An absent condition is no constraint at all and passes before value
/// validity is checked. A present condition is never satisfied by
/// missing or NaN data. An incomplete `Between` range is deliberately
/// unconstrained rather than an error.
pub fn evaluate(value: Option<f64>, cond: Option<&NumericCondition>) -> bool {
    let Some(cond) = cond else {
        return true;
    };
    let Some(value) = value else {
        return false;
    };
    if value.is_nan() {
        return false;
    }

    match cond.op {
        Comparator::Gt => cond.value.map_or(false, |v| value > v),
        Comparator::Gte => cond.value.map_or(false, |v| value >= v),
        Comparator::Eq => cond.value.map_or(false, |v| value == v),
        Comparator::Lte => cond.value.map_or(false, |v| value <= v),
        Comparator::Lt => cond.value.map_or(false, |v| value < v),
        Comparator::Between => match (cond.value, cond.value2) {
            (Some(a), Some(b)) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                value >= lo && value <= hi
            }
            // Incomplete range is a no-op, not a failure.
            _ => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(op: Comparator, value: f64) -> NumericCondition {
        NumericCondition::new(op, value)
    }

    #[test]
    fn absent_condition_always_passes() {
        assert!(evaluate(Some(5.0), None));
        assert!(evaluate(None, None));
        assert!(evaluate(Some(f64::NAN), None));
    }

    #[test]
    fn missing_value_never_satisfies_a_condition() {
        let c = cond(Comparator::Gte, 0.0);
        assert!(!evaluate(None, Some(&c)));
        assert!(!evaluate(Some(f64::NAN), Some(&c)));
    }

    #[test]
    fn operator_semantics() {
        assert!(evaluate(Some(10.0), Some(&cond(Comparator::Gt, 5.0))));
        assert!(!evaluate(Some(5.0), Some(&cond(Comparator::Gt, 5.0))));

        assert!(evaluate(Some(5.0), Some(&cond(Comparator::Gte, 5.0))));
        assert!(!evaluate(Some(4.9), Some(&cond(Comparator::Gte, 5.0))));

        assert!(evaluate(Some(5.0), Some(&cond(Comparator::Eq, 5.0))));
        assert!(!evaluate(Some(5.1), Some(&cond(Comparator::Eq, 5.0))));

        assert!(evaluate(Some(5.0), Some(&cond(Comparator::Lte, 5.0))));
        assert!(!evaluate(Some(5.1), Some(&cond(Comparator::Lte, 5.0))));

        assert!(evaluate(Some(4.9), Some(&cond(Comparator::Lt, 5.0))));
        assert!(!evaluate(Some(5.0), Some(&cond(Comparator::Lt, 5.0))));
    }

    #[test]
    fn missing_operand_fails_fixed_comparisons() {
        let c = NumericCondition {
            op: Comparator::Gt,
            value: None,
            value2: None,
        };
        assert!(!evaluate(Some(10.0), Some(&c)));
    }

    #[test]
    fn between_is_inclusive_and_order_independent() {
        let forward = NumericCondition::between(5.0, 10.0);
        let reversed = NumericCondition::between(10.0, 5.0);

        for x in [5.0, 7.0, 10.0] {
            assert!(evaluate(Some(x), Some(&forward)));
            assert!(evaluate(Some(x), Some(&reversed)));
        }
        for x in [4.9, 10.1] {
            assert!(!evaluate(Some(x), Some(&forward)));
            assert!(!evaluate(Some(x), Some(&reversed)));
        }
    }

    #[test]
    fn incomplete_between_is_unconstrained() {
        let half = NumericCondition {
            op: Comparator::Between,
            value: Some(5.0),
            value2: None,
        };
        assert!(evaluate(Some(999.0), Some(&half)));
        // Missing data still fails even an unconstrained range.
        assert!(!evaluate(None, Some(&half)));
    }

    #[test]
    fn empty_conditions_normalize_to_none() {
        let no_operand = NumericCondition {
            op: Comparator::Lt,
            value: None,
            value2: None,
        };
        assert!(no_operand.normalized().is_none());

        let nan = NumericCondition::new(Comparator::Gte, f64::NAN);
        assert!(nan.normalized().is_none());

        let half_range = NumericCondition {
            op: Comparator::Between,
            value: Some(1.0),
            value2: None,
        };
        assert!(half_range.normalized().is_none());

        assert!(NumericCondition::between(1.0, 2.0).normalized().is_some());
        assert!(cond(Comparator::Gt, 1.0).normalized().is_some());
    }

    #[test]
    fn unknown_operator_keys_parse_to_none() {
        assert_eq!(Comparator::from_key("ne"), None);
        assert_eq!(Comparator::from_key(""), None);
        assert_eq!(Comparator::from_key("GTE"), None);
        assert_eq!(Comparator::from_key("between"), Some(Comparator::Between));
    }
}
