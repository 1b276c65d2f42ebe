//! Select control over a fixed option list

use dioxus::prelude::*;
use formbldr_core::{ControlSize, SelectOption};

use crate::style;

#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    pub id: String,
    pub options: Vec<SelectOption>,
    #[props(default)]
    pub label: Option<String>,
    /// Caption for the leading empty option shown until a value is picked
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub message: Option<String>,
    #[props(default)]
    pub error: bool,
    #[props(default)]
    pub full_width: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub size: ControlSize,
    #[props(default)]
    pub value: String,
    pub onchange: EventHandler<FormEvent>,
    pub onblur: EventHandler<FocusEvent>,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let SelectProps {
        id,
        options,
        label,
        placeholder,
        message,
        error,
        full_width,
        disabled,
        size,
        value,
        onchange,
        onblur,
    } = props;

    rsx! {
        if let Some(label) = label {
            label {
                r#for: "{id}",
                class: style::LABEL_CLASSES,
                "{label}"
            }
        }
        select {
            id: "{id}",
            disabled: disabled,
            class: "{style::control_classes(size, full_width, disabled)}",
            onchange: move |evt| onchange.call(evt),
            onblur: move |evt| onblur.call(evt),

            // Keep the control consistent with the empty initial value
            option {
                value: "",
                disabled: true,
                selected: value.is_empty(),
                {placeholder.unwrap_or_default()}
            }
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == value,
                    "{opt.label}"
                }
            }
        }
        if let Some(message) = message {
            span {
                class: style::message_classes(error),
                "{message}"
            }
        }
    }
}
