//! Presentational field components
//!
//! Each renders one form control from props alone: label above the control
//! when present, the control with merged utility classes, and a message span
//! below (red when the error flag is set). No internal state; absent props
//! degrade visually and never panic.

mod checkbox;
mod input_submit;
mod input_text;
mod select;

pub use checkbox::{Checkbox, CheckboxProps};
pub use input_submit::{InputSubmit, InputSubmitProps};
pub use input_text::{InputText, InputTextProps};
pub use select::{Select, SelectProps};
