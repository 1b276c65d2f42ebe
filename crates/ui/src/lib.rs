//! FormBldr UI - Dioxus rendering layer
//!
//! Turns a [`formbldr_core::FieldDescriptor`] list into a live, validated
//! form. The presentational components in [`components`] are usable on their
//! own; [`builder::FormBuilder`] wires them to a
//! [`formbldr_core::FormController`] behind a single signal.

pub mod builder;
pub mod components;
pub(crate) mod style;
pub mod submit;

pub use builder::{FormBuilder, FormBuilderProps};
pub use components::{Checkbox, InputSubmit, InputText, Select};
pub use submit::SubmitHandler;
