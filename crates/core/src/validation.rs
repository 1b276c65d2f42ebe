//! Validation rules - the per-field half of the validation schema
//!
//! Rules are plain data and serialize alongside descriptors. Every stored
//! form value is a string; numeric rules parse on the fly and checkbox truth
//! is the literal string `"true"`. Evaluation returns the first failing
//! message, which is what gets rendered under the control.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// A length bound with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LenBound {
    pub limit: usize,
    pub message: String,
}

/// A numeric bound with its user-facing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumBound {
    pub limit: f64,
    pub message: String,
}

/// Validation rule for one field, tagged by the value kind it checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValidationRule {
    #[serde(rename = "string")]
    Text(TextRule),
    #[serde(rename = "number")]
    Numeric(NumericRule),
    #[serde(rename = "bool")]
    Flag(FlagRule),
}

impl ValidationRule {
    /// Start a string rule; unconstrained, it accepts anything
    pub fn string() -> TextRule {
        TextRule::default()
    }

    /// Start a numeric rule over string input
    pub fn number() -> NumericRule {
        NumericRule::default()
    }

    /// Start a checkbox rule
    pub fn boolean() -> FlagRule {
        FlagRule::default()
    }

    /// The default rule for fields that declare none
    pub fn permissive() -> Self {
        ValidationRule::Text(TextRule::default())
    }

    /// Check a raw value, returning the first failing message
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            ValidationRule::Text(rule) => rule.validate(value),
            ValidationRule::Numeric(rule) => rule.validate(value),
            ValidationRule::Flag(rule) => rule.validate(value),
        }
    }
}

/// Rule for free-text fields
///
/// Constraints other than `required` only apply to non-empty input, so an
/// optional email field left blank still passes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_len: Option<LenBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_len: Option<LenBound>,
}

impl TextRule {
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.email = Some(message.into());
        self
    }

    pub fn min_len(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.min_len = Some(LenBound {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn max_len(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.max_len = Some(LenBound {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            if let Some(message) = &self.required {
                return Err(message.clone());
            }
            return Ok(());
        }
        if let Some(message) = &self.email {
            if !value.validate_email() {
                return Err(message.clone());
            }
        }
        let len = value.chars().count();
        if let Some(bound) = &self.min_len {
            if len < bound.limit {
                return Err(bound.message.clone());
            }
        }
        if let Some(bound) = &self.max_len {
            if len > bound.limit {
                return Err(bound.message.clone());
            }
        }
        Ok(())
    }
}

impl From<TextRule> for ValidationRule {
    fn from(rule: TextRule) -> Self {
        ValidationRule::Text(rule)
    }
}

/// Rule for fields whose string value must parse as a number
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<NumBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<NumBound>,
}

impl NumericRule {
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Message shown when the value does not parse as a number
    pub fn type_error(mut self, message: impl Into<String>) -> Self {
        self.type_error = Some(message.into());
        self
    }

    pub fn min(mut self, limit: f64, message: impl Into<String>) -> Self {
        self.min = Some(NumBound {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn max(mut self, limit: f64, message: impl Into<String>) -> Self {
        self.max = Some(NumBound {
            limit,
            message: message.into(),
        });
        self
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            if let Some(message) = &self.required {
                return Err(message.clone());
            }
            return Ok(());
        }
        let number: f64 = match value.trim().parse() {
            Ok(number) => number,
            Err(_) => {
                return Err(self
                    .type_error
                    .clone()
                    .unwrap_or_else(|| "Must be a number".to_string()));
            }
        };
        if let Some(bound) = &self.min {
            if number < bound.limit {
                return Err(bound.message.clone());
            }
        }
        if let Some(bound) = &self.max {
            if number > bound.limit {
                return Err(bound.message.clone());
            }
        }
        Ok(())
    }
}

impl From<NumericRule> for ValidationRule {
    fn from(rule: NumericRule) -> Self {
        ValidationRule::Numeric(rule)
    }
}

/// Rule for checkbox fields, where the stored value is `"true"` or empty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    must_be_true: Option<String>,
}

impl FlagRule {
    /// Require the box to be checked, e.g. accept-terms gates
    pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
        self.must_be_true = Some(message.into());
        self
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        if let Some(message) = &self.must_be_true {
            if value != "true" {
                return Err(message.clone());
            }
        }
        Ok(())
    }
}

impl From<FlagRule> for ValidationRule {
    fn from(rule: FlagRule) -> Self {
        ValidationRule::Flag(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_string_rejects_empty() {
        let rule = ValidationRule::string().required("First name is required");
        assert_eq!(
            ValidationRule::from(rule.clone()).validate(""),
            Err("First name is required".to_string())
        );
        assert_eq!(ValidationRule::from(rule).validate("Ann"), Ok(()));
    }

    #[test]
    fn permissive_rule_accepts_anything() {
        let rule = ValidationRule::permissive();
        assert_eq!(rule.validate(""), Ok(()));
        assert_eq!(rule.validate("anything at all"), Ok(()));
    }

    #[test]
    fn optional_constraints_skip_empty_input() {
        let rule: ValidationRule = ValidationRule::string().email("Invalid email").into();
        assert_eq!(rule.validate(""), Ok(()));
    }

    #[test]
    fn email_rule_uses_real_address_syntax() {
        let rule: ValidationRule = ValidationRule::string().email("Invalid email").into();
        assert_eq!(rule.validate("not-an-email"), Err("Invalid email".to_string()));
        assert_eq!(rule.validate("ann@example.com"), Ok(()));
    }

    #[test]
    fn length_bounds_count_chars() {
        let rule: ValidationRule = ValidationRule::string()
            .min_len(2, "Too short")
            .max_len(4, "Too long")
            .into();
        assert_eq!(rule.validate("a"), Err("Too short".to_string()));
        assert_eq!(rule.validate("abcde"), Err("Too long".to_string()));
        assert_eq!(rule.validate("ab"), Ok(()));
    }

    #[test]
    fn numeric_rule_reports_type_error() {
        let rule: ValidationRule = ValidationRule::number()
            .type_error("Please enter a valid number")
            .required("Street number is required")
            .into();
        assert_eq!(
            rule.validate("abc"),
            Err("Please enter a valid number".to_string())
        );
        assert_eq!(
            rule.validate(""),
            Err("Street number is required".to_string())
        );
        assert_eq!(rule.validate("42"), Ok(()));
    }

    #[test]
    fn numeric_rule_has_fallback_type_error() {
        let rule: ValidationRule = ValidationRule::number().into();
        assert_eq!(rule.validate("abc"), Err("Must be a number".to_string()));
    }

    #[test]
    fn numeric_bounds_apply_after_parse() {
        let rule: ValidationRule = ValidationRule::number()
            .min(1.0, "Too small")
            .max(10.0, "Too large")
            .into();
        assert_eq!(rule.validate("0"), Err("Too small".to_string()));
        assert_eq!(rule.validate("11"), Err("Too large".to_string()));
        assert_eq!(rule.validate("5.5"), Ok(()));
    }

    #[test]
    fn must_be_true_gates_on_the_literal_true() {
        let rule: ValidationRule = ValidationRule::boolean()
            .must_be_true("Please accept the terms and conditions")
            .into();
        assert_eq!(
            rule.validate(""),
            Err("Please accept the terms and conditions".to_string())
        );
        assert_eq!(
            rule.validate("yes"),
            Err("Please accept the terms and conditions".to_string())
        );
        assert_eq!(rule.validate("true"), Ok(()));
    }

    #[test]
    fn rules_round_trip_through_json_with_kind_tag() {
        let rule: ValidationRule = ValidationRule::string().required("Required").into();
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["kind"], "string");
        let parsed: ValidationRule = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, rule);
    }
}
