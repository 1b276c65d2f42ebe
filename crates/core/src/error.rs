//! Typed errors for form configuration and wiring
//!
//! Per-field validation failures are user-facing messages, not errors; they
//! live in the form state. `FormError` covers the ways a descriptor list or
//! a caller can be wrong.

use thiserror::Error;

/// Errors raised when building or driving a form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Two descriptors share a `name`; names key the values map
    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),

    /// A change or blur event referenced a name no descriptor declared
    #[error("unknown field name: {0}")]
    UnknownField(String),
}
