//! Single-line text input with label and message

use dioxus::prelude::*;
use formbldr_core::{ControlSize, TextInputType};

use crate::style;

#[derive(Props, Clone, PartialEq)]
pub struct InputTextProps {
    pub id: String,
    pub input_type: TextInputType,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Help or error text rendered under the control
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
    pub oninput: EventHandler<FormEvent>,
    pub onblur: EventHandler<FocusEvent>,
}

#[component]
pub fn InputText(props: InputTextProps) -> Element {
    let InputTextProps {
        id,
        input_type,
        label,
        placeholder,
        message,
        error,
        full_width,
        disabled,
        size,
        value,
        oninput,
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
        input {
            r#type: "{input_type.as_str()}",
            id: "{id}",
            disabled: disabled,
            value: "{value}",
            placeholder: placeholder.unwrap_or_default(),
            class: "{style::control_classes(size, full_width, disabled)}",
            oninput: move |evt| oninput.call(evt),
            onblur: move |evt| onblur.call(evt),
        }
        if let Some(message) = message {
            span {
                class: style::message_classes(error),
                "{message}"
            }
        }
    }
}
