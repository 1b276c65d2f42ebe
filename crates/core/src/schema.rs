//! Composite validation schema derived from a descriptor list
//!
//! One rule per field name, in descriptor order. Fields that declare no rule
//! get the permissive default, mirroring how the descriptor list is the
//! single source of truth for the whole form.

use std::collections::HashMap;

use crate::field::FieldDescriptor;
use crate::state::FormValues;
use crate::validation::ValidationRule;

/// The full rule set for one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    rules: Vec<(String, ValidationRule)>,
}

impl ValidationSchema {
    /// Build the schema for a descriptor list
    pub fn derive(fields: &[FieldDescriptor]) -> Self {
        let rules = fields
            .iter()
            .map(|field| {
                (
                    field.name.clone(),
                    field
                        .validation
                        .clone()
                        .unwrap_or_else(ValidationRule::permissive),
                )
            })
            .collect();
        Self { rules }
    }

    pub fn rule(&self, name: &str) -> Option<&ValidationRule> {
        self.rules
            .iter()
            .find(|(rule_name, _)| rule_name == name)
            .map(|(_, rule)| rule)
    }

    /// Check one field, returning its failure message if any
    ///
    /// Names outside the schema validate clean; the state layer decides
    /// whether such a name is an error at all.
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        self.rule(name)
            .and_then(|rule| rule.validate(value).err())
    }

    /// Check every field against the current values map
    pub fn validate_all(&self, values: &FormValues) -> HashMap<String, String> {
        self.rules
            .iter()
            .filter_map(|(name, rule)| {
                let value = values.get(name).map(String::as_str).unwrap_or("");
                rule.validate(value)
                    .err()
                    .map(|message| (name.clone(), message))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TextInputType;

    fn sample_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::input("firstName", TextInputType::Text)
                .with_validation(ValidationRule::string().required("First name is required")),
            FieldDescriptor::input("nickname", TextInputType::Text),
            FieldDescriptor::checkbox("acceptTerms")
                .with_validation(ValidationRule::boolean().must_be_true("Please accept")),
        ]
    }

    #[test]
    fn undeclared_rules_default_to_permissive() {
        let schema = ValidationSchema::derive(&sample_fields());
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.validate_field("nickname", ""), None);
        assert_eq!(schema.validate_field("nickname", "whatever"), None);
    }

    #[test]
    fn validate_field_returns_declared_message() {
        let schema = ValidationSchema::derive(&sample_fields());
        assert_eq!(
            schema.validate_field("firstName", ""),
            Some("First name is required".to_string())
        );
        assert_eq!(schema.validate_field("firstName", "Ann"), None);
    }

    #[test]
    fn unknown_names_validate_clean() {
        let schema = ValidationSchema::derive(&sample_fields());
        assert_eq!(schema.validate_field("ghost", ""), None);
    }

    #[test]
    fn validate_all_collects_only_failures() {
        let schema = ValidationSchema::derive(&sample_fields());
        let mut values = FormValues::new();
        values.insert("firstName".to_string(), String::new());
        values.insert("nickname".to_string(), String::new());
        values.insert("acceptTerms".to_string(), "true".to_string());

        let errors = schema.validate_all(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("firstName"),
            Some(&"First name is required".to_string())
        );
    }

    #[test]
    fn missing_values_are_treated_as_empty() {
        let schema = ValidationSchema::derive(&sample_fields());
        let errors = schema.validate_all(&FormValues::new());
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("acceptTerms"));
    }
}
