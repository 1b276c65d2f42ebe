//! Checkbox control
//!
//! When a label is present the control renders inside it, so clicking the
//! text toggles the box; otherwise the bare input is emitted.

use dioxus::prelude::*;
use formbldr_core::ControlSize;

use crate::style;

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub id: String,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub inline: bool,
    #[props(default)]
    pub message: Option<String>,
    #[props(default)]
    pub error: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub size: ControlSize,
    #[props(default)]
    pub checked: bool,
    pub onchange: EventHandler<FormEvent>,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let CheckboxProps {
        id,
        label,
        inline,
        message,
        error,
        disabled,
        size,
        checked,
        onchange,
    } = props;

    let control = rsx! {
        input {
            r#type: "checkbox",
            id: "{id}",
            disabled: disabled,
            checked: checked,
            class: "{style::checkbox_classes(size, inline, disabled)}",
            onchange: move |evt| onchange.call(evt),
        }
    };

    rsx! {
        if let Some(label) = label {
            label {
                r#for: "{id}",
                class: "{style::checkbox_label_classes(inline)}",
                {control.clone()}
                " {label}"
            }
        } else {
            {control}
        }
        if let Some(message) = message {
            span {
                class: style::message_classes(error),
                "{message}"
            }
        }
    }
}
