//! Single-field input validation.
//!
//! Length bounds are strict (`len > min_length`, `len < max_length`) and
//! numeric bounds are inclusive (`value >= min`, `value <= max`). Length
//! constraints are ignored for numbers and range constraints for text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Optional constraints for one field; absent constraints always pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Constraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// A value paired with the constraints it must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>, constraints: Constraints) -> Self {
        Self {
            value: value.into(),
            constraints,
        }
    }

    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Checks every present constraint against the value
pub fn validate(input: &Validatable) -> bool {
    let c = &input.constraints;
    let mut is_valid = true;

    if c.required {
        is_valid &= !input.value.to_string().trim().is_empty();
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if let Some(min_length) = c.min_length {
                is_valid &= len > min_length;
            }
            if let Some(max_length) = c.max_length {
                is_valid &= len < max_length;
            }
        }
        FieldValue::Number(number) => {
            // NaN compares false against everything, so it fails any bound
            if let Some(min) = c.min {
                is_valid &= *number >= min;
            }
            if let Some(max) = c.max {
                is_valid &= *number <= max;
            }
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints_always_valid() {
        assert!(validate(&Validatable::new("", Constraints::default())));
        assert!(validate(&Validatable::new(f64::NAN, Constraints::default())));
    }

    #[test]
    fn test_required_rejects_blank_text() {
        assert!(!validate(&Validatable::new("", Constraints::required())));
        assert!(!validate(&Validatable::new("   ", Constraints::required())));
        assert!(validate(&Validatable::new("x", Constraints::required())));
    }

    #[test]
    fn test_required_accepts_any_number() {
        assert!(validate(&Validatable::new(0.0, Constraints::required())));
    }

    #[test]
    fn test_min_length_is_strict() {
        let rules = Constraints::required().with_min_length(1);
        assert!(validate(&Validatable::new("ok", rules.clone())));
        assert!(!validate(&Validatable::new("o", rules)));

        let rules = Constraints::default().with_min_length(5);
        assert!(!validate(&Validatable::new("short", rules.clone())));
        assert!(validate(&Validatable::new("longer", rules)));
    }

    #[test]
    fn test_max_length_is_strict() {
        let rules = Constraints::default().with_max_length(3);
        assert!(validate(&Validatable::new("ab", rules.clone())));
        assert!(!validate(&Validatable::new("abc", rules)));
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = Constraints::default().with_max_length(3);
        assert!(validate(&Validatable::new("éé", rules.clone())));
        assert!(!validate(&Validatable::new("ééé", rules)));
    }

    #[test]
    fn test_range_is_inclusive() {
        let rules = Constraints::required().with_range(1.0, 5.0);
        assert!(validate(&Validatable::new(1.0, rules.clone())));
        assert!(validate(&Validatable::new(5.0, rules.clone())));
        assert!(!validate(&Validatable::new(0.0, rules.clone())));
        assert!(!validate(&Validatable::new(6.0, rules.clone())));
        assert!(!validate(&Validatable::new(f64::NAN, rules)));
    }

    #[test]
    fn test_constraints_ignored_for_other_kind() {
        let length_rules = Constraints::default().with_min_length(10);
        assert!(validate(&Validatable::new(3.0, length_rules)));

        let range_rules = Constraints::default().with_range(1.0, 5.0);
        assert!(validate(&Validatable::new("a long text value", range_rules)));
    }

    #[test]
    fn test_constraints_deserialize_with_defaults() {
        let rules: Constraints = serde_json::from_str(r#"{"required": true, "min": 1}"#).unwrap();
        assert!(rules.required);
        assert_eq!(rules.min, Some(1.0));
        assert!(rules.max.is_none());
        assert!(rules.min_length.is_none());
    }
}
