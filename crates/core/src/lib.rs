//! FormBldr Core - declarative form model
//!
//! UI-framework-free layer of the form builder: field descriptors, validation
//! rules, the schema derived from a descriptor list, and the state machine
//! owned by one mounted form. Rendering lives in `formbldr-ui`.

pub mod error;
pub mod field;
pub mod schema;
pub mod state;
pub mod validation;

pub use error::FormError;
pub use field::{
    ColSpan, ControlSize, FieldControl, FieldDescriptor, SelectOption, SubmitVariant,
    TextInputType,
};
pub use schema::ValidationSchema;
pub use state::{FormController, FormState, FormValues, SubmitAttempt};
pub use validation::{FlagRule, NumericRule, TextRule, ValidationRule};
