//! Submit button rendered as `<input type="submit">`

use dioxus::prelude::*;
use formbldr_core::{ControlSize, SubmitVariant};

use crate::style;

#[derive(Props, Clone, PartialEq)]
pub struct InputSubmitProps {
    pub id: String,
    /// Button caption
    #[props(default)]
    pub value: String,
    #[props(default)]
    pub variant: SubmitVariant,
    #[props(default)]
    pub size: ControlSize,
    #[props(default)]
    pub full_width: bool,
    #[props(default)]
    pub disabled: bool,
}

#[component]
pub fn InputSubmit(props: InputSubmitProps) -> Element {
    let InputSubmitProps {
        id,
        value,
        variant,
        size,
        full_width,
        disabled,
    } = props;

    rsx! {
        input {
            r#type: "submit",
            id: "{id}",
            value: "{value}",
            disabled: disabled,
            class: "{style::submit_classes(variant, size, full_width, disabled)}",
        }
    }
}
