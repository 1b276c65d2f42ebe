//! Tailwind utility class tables shared by the field components
//!
//! Kept as pure functions so the class output stays testable without a DOM.

use formbldr_core::{ColSpan, ControlSize, SubmitVariant};

pub(crate) const LABEL_CLASSES: &str = "mb-2 block text-sm font-medium text-gray-800";
pub(crate) const CONTROL_BASE_CLASSES: &str = "border-black rounded focus:border-blue-500";
pub(crate) const MESSAGE_BASE_CLASSES: &str = "mb-2 block text-sm font-medium";

pub(crate) fn size_classes(size: ControlSize) -> &'static str {
    match size {
        ControlSize::Small => "p-2 sm:text-xs",
        ControlSize::Medium => "p-2.5 text-sm",
        ControlSize::Large => "p-4 sm:text-md",
    }
}

/// Classes for a text input or select control
pub(crate) fn control_classes(size: ControlSize, full_width: bool, disabled: bool) -> String {
    let mut classes = vec![CONTROL_BASE_CLASSES];
    if full_width {
        classes.push("w-full");
    }
    if disabled {
        classes.push("bg-gray-100");
    }
    classes.push(size_classes(size));
    classes.join(" ")
}

/// Classes for the checkbox control itself
pub(crate) fn checkbox_classes(size: ControlSize, inline: bool, disabled: bool) -> String {
    let mut classes = vec![CONTROL_BASE_CLASSES, "mr-2"];
    if inline {
        classes.push("inline-block");
    }
    if disabled {
        classes.push("bg-gray-100");
    }
    classes.push(size_classes(size));
    classes.join(" ")
}

/// Classes for the label wrapping a checkbox
pub(crate) fn checkbox_label_classes(inline: bool) -> String {
    let layout = if inline { "inline-flex mr-2" } else { "flex" };
    format!("mb-2 text-sm font-medium text-gray-800 items-center {layout}")
}

pub(crate) fn message_classes(error: bool) -> &'static str {
    if error {
        "mb-2 block text-sm font-medium text-red-700"
    } else {
        MESSAGE_BASE_CLASSES
    }
}

pub(crate) fn submit_variant_classes(variant: SubmitVariant) -> &'static str {
    match variant {
        SubmitVariant::Primary => "bg-blue-700 hover:bg-blue-500 text-white rounded",
        SubmitVariant::Secondary => "bg-gray-200 hover:bg-gray-300 rounded",
        SubmitVariant::Basic => "bg-white hover:text-gray-700 focus:text-gray-700",
    }
}

pub(crate) fn submit_size_classes(size: ControlSize) -> &'static str {
    match size {
        ControlSize::Small => "py-1 px-2 text-xs",
        ControlSize::Medium => "py-2 px-4",
        ControlSize::Large => "py-3 px-6 text-lg",
    }
}

pub(crate) fn submit_classes(
    variant: SubmitVariant,
    size: ControlSize,
    full_width: bool,
    disabled: bool,
) -> String {
    let mut classes = vec![submit_size_classes(size), submit_variant_classes(variant)];
    if full_width {
        classes.push("w-full cursor-pointer");
    }
    if disabled {
        classes.push("cursor-not-allowed");
    }
    classes.join(" ")
}

/// Grid wrapper classes for one field: full width on small screens, the
/// declared span from the breakpoint up (12 spans the whole row already)
pub(crate) fn col_span_classes(col: ColSpan) -> String {
    if col.get() == 12 {
        "col-span-12".to_string()
    } else {
        format!("col-span-12 lg:col-span-{}", col.get())
    }
}

/// Classes for the form element, merging any caller-supplied extras
pub(crate) fn form_classes(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{extra} mb-4 grid gap-4 md:grid-cols-12"),
        _ => "mb-4 grid gap-4 md:grid-cols-12".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_map_matches_design() {
        assert_eq!(size_classes(ControlSize::Small), "p-2 sm:text-xs");
        assert_eq!(size_classes(ControlSize::Medium), "p-2.5 text-sm");
        assert_eq!(size_classes(ControlSize::Large), "p-4 sm:text-md");
    }

    #[test]
    fn control_classes_toggle_width_and_disabled_state() {
        assert_eq!(
            control_classes(ControlSize::Medium, false, false),
            "border-black rounded focus:border-blue-500 p-2.5 text-sm"
        );
        assert_eq!(
            control_classes(ControlSize::Medium, true, true),
            "border-black rounded focus:border-blue-500 w-full bg-gray-100 p-2.5 text-sm"
        );
    }

    #[test]
    fn message_turns_red_only_on_error() {
        assert_eq!(message_classes(false), "mb-2 block text-sm font-medium");
        assert_eq!(
            message_classes(true),
            "mb-2 block text-sm font-medium text-red-700"
        );
    }

    #[test]
    fn full_width_column_needs_no_span_override() {
        assert_eq!(col_span_classes(ColSpan::FULL), "col-span-12");
        assert_eq!(col_span_classes(ColSpan::new(6)), "col-span-12 lg:col-span-6");
        assert_eq!(col_span_classes(ColSpan::new(1)), "col-span-12 lg:col-span-1");
    }

    #[test]
    fn submit_variants_match_design() {
        assert_eq!(
            submit_classes(SubmitVariant::Primary, ControlSize::Medium, true, false),
            "py-2 px-4 bg-blue-700 hover:bg-blue-500 text-white rounded w-full cursor-pointer"
        );
        assert_eq!(
            submit_classes(SubmitVariant::Basic, ControlSize::Small, false, true),
            "py-1 px-2 text-xs bg-white hover:text-gray-700 focus:text-gray-700 cursor-not-allowed"
        );
    }

    #[test]
    fn caller_classes_prepend_the_grid() {
        assert_eq!(form_classes(None), "mb-4 grid gap-4 md:grid-cols-12");
        assert_eq!(
            form_classes(Some("my-form")),
            "my-form mb-4 grid gap-4 md:grid-cols-12"
        );
    }
}
