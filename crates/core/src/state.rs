//! Form state machine
//!
//! One [`FormController`] owns the state of one mounted form for its whole
//! lifetime. The state is never shared or global; the rendering layer holds
//! the controller and goes through its API for every transition.
//!
//! A single field's visible error walks `untouched -> touched(valid) ->
//! touched(invalid)` and nothing else: errors are recorded on every change,
//! but only shown once the field is touched (blur, or a submit attempt).

use std::collections::{HashMap, HashSet};

use crate::error::FormError;
use crate::field::FieldDescriptor;
use crate::schema::ValidationSchema;

/// Current values keyed by field name; every value is a string
pub type FormValues = HashMap<String, String>;

/// Snapshot of everything a form render needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub touched: HashMap<String, bool>,
    pub errors: HashMap<String, String>,
    pub is_submitting: bool,
    /// Form-level message set when the submit callback rejects
    pub submit_error: Option<String>,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Everything validated; the values snapshot is ready for the callback
    Valid(FormValues),
    /// At least one field failed; errors are recorded and now visible
    Invalid,
    /// A previous submit is still running; nothing changed
    InFlight,
}

/// Drives one form instance: values, touched flags, errors, submit lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    initial: FormValues,
    schema: ValidationSchema,
    state: FormState,
}

impl FormController {
    /// Build a controller for a descriptor list
    ///
    /// Every field starts at the empty string, whatever its control kind.
    /// Fails only when two descriptors share a name.
    pub fn new(fields: &[FieldDescriptor]) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateFieldName(field.name.clone()));
            }
        }
        let initial: FormValues = fields
            .iter()
            .map(|field| (field.name.clone(), String::new()))
            .collect();
        Ok(Self {
            state: FormState {
                values: initial.clone(),
                ..FormState::default()
            },
            initial,
            schema: ValidationSchema::derive(fields),
        })
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, name: &str) -> &str {
        self.state
            .values
            .get(name)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.state.touched.get(name).copied().unwrap_or(false)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.state.submit_error.as_deref()
    }

    /// The message to render under a field: present only when the field is
    /// both touched and currently invalid
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if !self.is_touched(name) {
            return None;
        }
        self.state.errors.get(name).map(String::as_str)
    }

    /// Record a change event and re-validate that field
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.state.values.contains_key(name) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        let value = value.into();
        match self.schema.validate_field(name, &value) {
            Some(message) => {
                self.state.errors.insert(name.to_string(), message);
            }
            None => {
                self.state.errors.remove(name);
            }
        }
        self.state.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Record a blur event; unknown names are ignored
    pub fn touch(&mut self, name: &str) {
        if self.state.values.contains_key(name) {
            self.state.touched.insert(name.to_string(), true);
        }
    }

    /// Run full validation and, when clean, enter the submitting state
    ///
    /// Every field becomes touched either way, so all failures are visible
    /// after the attempt. The values snapshot in [`SubmitAttempt::Valid`] is
    /// what the submit callback receives.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.state.is_submitting {
            return SubmitAttempt::InFlight;
        }
        for name in self.state.values.keys() {
            self.state.touched.insert(name.clone(), true);
        }
        self.state.submit_error = None;
        let errors = self.schema.validate_all(&self.state.values);
        if errors.is_empty() {
            self.state.errors.clear();
            self.state.is_submitting = true;
            SubmitAttempt::Valid(self.state.values.clone())
        } else {
            self.state.errors = errors;
            SubmitAttempt::Invalid
        }
    }

    /// The submit callback resolved: reset to the initial state
    pub fn complete_submit(&mut self) {
        self.reset();
    }

    /// The submit callback rejected: re-enable the form and surface the
    /// message as a form-level banner
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.state.is_submitting = false;
        self.state.submit_error = Some(message.into());
    }

    /// Drop all interaction state and return every value to the initial
    /// empty string
    pub fn reset(&mut self) {
        self.state = FormState {
            values: self.initial.clone(),
            ..FormState::default()
        };
    }
}
