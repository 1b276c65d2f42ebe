//! FormBuilder - compiles a descriptor list into a working form
//!
//! One `FormBuilder` owns one [`FormController`] behind a signal. Fields
//! render into a responsive 12-column grid and are wired to the controller
//! for value, error, blur, and disabled state. Submit validates everything,
//! runs the async callback with the form disabled, then resets on success or
//! surfaces a banner on rejection.

use dioxus::prelude::*;
use formbldr_core::{
    FieldControl, FieldDescriptor, FormController, FormError, SubmitAttempt,
};

use crate::components::{Checkbox, InputSubmit, InputText, Select};
use crate::style;
use crate::submit::SubmitHandler;

#[derive(Props, Clone, PartialEq)]
pub struct FormBuilderProps {
    pub fields: Vec<FieldDescriptor>,
    pub on_submit: SubmitHandler,
    /// Extra classes merged onto the form element
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn FormBuilder(props: FormBuilderProps) -> Element {
    let FormBuilderProps {
        fields,
        on_submit,
        class,
    } = props;

    let controller = use_signal({
        let fields = fields.clone();
        move || FormController::new(&fields)
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut controller = controller;
        let attempt = match &mut *controller.write() {
            Ok(form) => form.begin_submit(),
            Err(_) => return,
        };
        match attempt {
            SubmitAttempt::Valid(values) => {
                let submit = on_submit.clone();
                spawn(async move {
                    let outcome = submit.call(values).await;
                    if let Ok(form) = &mut *controller.write() {
                        match outcome {
                            Ok(()) => form.complete_submit(),
                            Err(message) => {
                                tracing::warn!(error = %message, "form submit callback rejected");
                                form.fail_submit(message);
                            }
                        }
                    }
                });
            }
            SubmitAttempt::Invalid | SubmitAttempt::InFlight => {}
        }
    };

    let form_guard = controller.read();
    match &*form_guard {
        Err(error) => rsx! {
            div {
                class: "mb-4 p-3 text-sm text-red-700",
                "Invalid form configuration: {error}"
            }
        },
        Ok(form) => {
            let disabled = form.is_submitting();
            rsx! {
                form {
                    class: "{style::form_classes(class.as_deref())}",
                    onsubmit: handle_submit,

                    if let Some(banner) = form.submit_error() {
                        div {
                            class: "col-span-12 p-3 text-sm text-red-700 bg-red-50 rounded",
                            "{banner}"
                        }
                    }
                    for field in fields.iter() {
                        div {
                            key: "{field.name}",
                            class: "{style::col_span_classes(field.col)}",
                            {field_element(field, form, disabled, controller)}
                        }
                    }
                }
            }
        }
    }
}

/// Render one field through the control lookup, wired to the controller
fn field_element(
    field: &FieldDescriptor,
    form: &FormController,
    disabled: bool,
    controller: Signal<Result<FormController, FormError>>,
) -> Element {
    let message = form.visible_error(&field.name).map(ToOwned::to_owned);
    let error = message.is_some();

    match &field.control {
        FieldControl::Input {
            input_type,
            placeholder,
        } => {
            let name = field.name.clone();
            let blur_name = field.name.clone();
            rsx! {
                InputText {
                    id: field.id.clone(),
                    input_type: *input_type,
                    label: field.label.clone(),
                    placeholder: placeholder.clone(),
                    message,
                    error,
                    full_width: field.full_width,
                    disabled,
                    size: field.size,
                    value: form.value(&field.name).to_owned(),
                    oninput: move |evt: FormEvent| apply_change(controller, &name, evt.value()),
                    onblur: move |_| apply_touch(controller, &blur_name),
                }
            }
        }
        FieldControl::Select { options } => {
            let name = field.name.clone();
            let blur_name = field.name.clone();
            rsx! {
                Select {
                    id: field.id.clone(),
                    options: options.clone(),
                    label: field.label.clone(),
                    message,
                    error,
                    full_width: field.full_width,
                    disabled,
                    size: field.size,
                    value: form.value(&field.name).to_owned(),
                    onchange: move |evt: FormEvent| apply_change(controller, &name, evt.value()),
                    onblur: move |_| apply_touch(controller, &blur_name),
                }
            }
        }
        FieldControl::Checkbox { inline } => {
            let name = field.name.clone();
            rsx! {
                Checkbox {
                    id: field.id.clone(),
                    label: field.label.clone(),
                    inline: *inline,
                    message,
                    error,
                    disabled,
                    size: field.size,
                    checked: form.value(&field.name) == "true",
                    // Toggling a checkbox is a definitive interaction, so it
                    // counts as touched without waiting for blur
                    onchange: move |evt: FormEvent| {
                        let value = if evt.checked() { "true" } else { "" };
                        apply_change(controller, &name, value.to_string());
                        apply_touch(controller, &name);
                    },
                }
            }
        }
        FieldControl::Submit { value, variant } => rsx! {
            InputSubmit {
                id: field.id.clone(),
                value: value.clone(),
                variant: *variant,
                size: field.size,
                full_width: field.full_width,
                disabled,
            }
        },
        FieldControl::Unknown { .. } => rsx! {
            div { {mismatch_message(&field.id)} }
        },
    }
}

fn apply_change(
    mut controller: Signal<Result<FormController, FormError>>,
    name: &str,
    value: String,
) {
    if let Ok(form) = &mut *controller.write() {
        if let Err(error) = form.set_value(name, value) {
            tracing::warn!(%error, "change event for unwired field");
        }
    }
}

fn apply_touch(mut controller: Signal<Result<FormController, FormError>>, name: &str) {
    if let Ok(form) = &mut *controller.write() {
        form.touch(name);
    }
}

/// Inline diagnostic for a `component` tag outside the known set
fn mismatch_message(id: &str) -> String {
    format!("It seems to be a mismatch in your form configuration schema on ID {id}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_diagnostic_names_the_field_id() {
        let message = mismatch_message("street-name");
        assert!(message.contains("street-name"));
        assert!(message.contains("mismatch in your form configuration"));
    }
}
