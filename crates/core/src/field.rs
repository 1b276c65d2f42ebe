//! Field descriptors - the declarative input to the form builder
//!
//! A form is described by a list of [`FieldDescriptor`]s. Descriptors
//! (de)serialize from the JSON-like shape the builder was designed around:
//! camelCase keys, the control kind under a `component` tag, the input type
//! under `type`. An unrecognized `component` tag never fails
//! deserialization; it is preserved as [`FieldControl::Unknown`] so the
//! renderer can show an inline diagnostic for that one field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::ValidationRule;

/// Visual size of a rendered control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Native `type` attribute of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    Email,
    Password,
    Search,
    Tel,
    #[default]
    Text,
    Url,
}

impl TextInputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Email => "email",
            TextInputType::Password => "password",
            TextInputType::Search => "search",
            TextInputType::Tel => "tel",
            TextInputType::Text => "text",
            TextInputType::Url => "url",
        }
    }
}

/// Visual variant of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitVariant {
    Primary,
    Secondary,
    #[default]
    Basic,
}

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Grid column width, 1..=12
///
/// Out-of-range values are clamped rather than rejected; a bad width
/// degrades the layout, it never breaks the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColSpan(u8);

impl ColSpan {
    /// Full row width
    pub const FULL: ColSpan = ColSpan(12);

    pub fn new(span: u8) -> Self {
        Self(span.clamp(1, 12))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ColSpan {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u8> for ColSpan {
    fn from(span: u8) -> Self {
        Self::new(span)
    }
}

impl<'de> Deserialize<'de> for ColSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::new)
    }
}

/// The kind of control a field renders, keyed by the `component` tag
///
/// Matched exhaustively by the renderer; `Unknown` carries any tag outside
/// the closed set so the mismatch can be reported inline per field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    Input {
        input_type: TextInputType,
        placeholder: Option<String>,
    },
    Select {
        options: Vec<SelectOption>,
    },
    Checkbox {
        inline: bool,
    },
    Submit {
        value: String,
        variant: SubmitVariant,
    },
    Unknown {
        tag: String,
    },
}

impl FieldControl {
    /// The `component` tag this control serializes under
    pub fn tag(&self) -> &str {
        match self {
            FieldControl::Input { .. } => "input",
            FieldControl::Select { .. } => "select",
            FieldControl::Checkbox { .. } => "checkbox",
            FieldControl::Submit { .. } => "submit",
            FieldControl::Unknown { tag } => tag,
        }
    }
}

/// Declarative description of one form control
///
/// `name` keys the form state and must be unique within a list; `id` lands
/// on the rendered element and defaults to `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub control: FieldControl,
    pub validation: Option<ValidationRule>,
    pub col: ColSpan,
    pub full_width: bool,
    pub size: ControlSize,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, control: FieldControl) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            label: None,
            control,
            validation: None,
            col: ColSpan::FULL,
            full_width: false,
            size: ControlSize::default(),
        }
    }

    /// Text input field
    pub fn input(name: impl Into<String>, input_type: TextInputType) -> Self {
        Self::new(
            name,
            FieldControl::Input {
                input_type,
                placeholder: None,
            },
        )
    }

    /// Select field with a fixed option list
    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(name, FieldControl::Select { options })
    }

    /// Checkbox field
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldControl::Checkbox { inline: false })
    }

    /// Submit button with the given caption
    pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldControl::Submit {
                value: value.into(),
                variant: SubmitVariant::default(),
            },
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Placeholder text; only meaningful on input controls
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        if let FieldControl::Input { placeholder, .. } = &mut self.control {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Submit button variant; only meaningful on submit controls
    pub fn with_variant(mut self, new_variant: SubmitVariant) -> Self {
        if let FieldControl::Submit { variant, .. } = &mut self.control {
            *variant = new_variant;
        }
        self
    }

    /// Render the checkbox inline with surrounding content
    pub fn inline(mut self) -> Self {
        if let FieldControl::Checkbox { inline } = &mut self.control {
            *inline = true;
        }
        self
    }

    pub fn with_validation(mut self, rule: impl Into<ValidationRule>) -> Self {
        self.validation = Some(rule.into());
        self
    }

    pub fn with_col(mut self, col: impl Into<ColSpan>) -> Self {
        self.col = col.into();
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }
}

/// Wire shape of a descriptor: flat camelCase object with a `component` tag
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    component: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    input_type: Option<TextInputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "is_false")]
    inline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<SubmitVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationRule>,
    #[serde(default)]
    col: ColSpan,
    #[serde(default, skip_serializing_if = "is_false")]
    full_width: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<ControlSize>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl From<RawField> for FieldDescriptor {
    fn from(raw: RawField) -> Self {
        let control = match raw.component.as_str() {
            "input" => FieldControl::Input {
                input_type: raw.input_type.unwrap_or_default(),
                placeholder: raw.placeholder,
            },
            "select" => FieldControl::Select {
                options: raw.options,
            },
            "checkbox" => FieldControl::Checkbox { inline: raw.inline },
            "submit" => FieldControl::Submit {
                value: raw.value.unwrap_or_default(),
                variant: raw.variant.unwrap_or_default(),
            },
            _ => FieldControl::Unknown { tag: raw.component },
        };
        Self {
            id: raw.id.unwrap_or_else(|| raw.name.clone()),
            name: raw.name,
            label: raw.label,
            control,
            validation: raw.validation,
            col: raw.col,
            full_width: raw.full_width,
            size: raw.size.unwrap_or_default(),
        }
    }
}

impl From<&FieldDescriptor> for RawField {
    fn from(field: &FieldDescriptor) -> Self {
        let mut raw = RawField {
            component: field.control.tag().to_string(),
            name: field.name.clone(),
            id: Some(field.id.clone()),
            label: field.label.clone(),
            input_type: None,
            placeholder: None,
            options: Vec::new(),
            inline: false,
            value: None,
            variant: None,
            validation: field.validation.clone(),
            col: field.col,
            full_width: field.full_width,
            size: Some(field.size),
        };
        match &field.control {
            FieldControl::Input {
                input_type,
                placeholder,
            } => {
                raw.input_type = Some(*input_type);
                raw.placeholder = placeholder.clone();
            }
            FieldControl::Select { options } => {
                raw.options = options.clone();
            }
            FieldControl::Checkbox { inline } => {
                raw.inline = *inline;
            }
            FieldControl::Submit { value, variant } => {
                raw.value = Some(value.clone());
                raw.variant = Some(*variant);
            }
            FieldControl::Unknown { .. } => {}
        }
        raw
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawField::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawField::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_descriptor_from_json() {
        let json = r#"{
            "component": "input",
            "id": "first-name",
            "name": "firstName",
            "label": "First Name",
            "type": "text",
            "col": 6,
            "fullWidth": true
        }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.id, "first-name");
        assert_eq!(field.name, "firstName");
        assert_eq!(field.label.as_deref(), Some("First Name"));
        assert_eq!(field.col.get(), 6);
        assert!(field.full_width);
        assert_eq!(
            field.control,
            FieldControl::Input {
                input_type: TextInputType::Text,
                placeholder: None,
            }
        );
    }

    #[test]
    fn unknown_component_tag_is_preserved_not_rejected() {
        let json = r#"{ "component": "textarea", "name": "bio" }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(
            field.control,
            FieldControl::Unknown {
                tag: "textarea".to_string()
            }
        );
        assert_eq!(field.control.tag(), "textarea");
    }

    #[test]
    fn id_defaults_to_name() {
        let json = r#"{ "component": "checkbox", "name": "acceptTerms" }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.id, "acceptTerms");
    }

    #[test]
    fn col_span_is_clamped_into_grid_range() {
        assert_eq!(ColSpan::new(0).get(), 1);
        assert_eq!(ColSpan::new(40).get(), 12);
        let field: FieldDescriptor =
            serde_json::from_str(r#"{ "component": "input", "name": "x", "col": 99 }"#).unwrap();
        assert_eq!(field.col.get(), 12);
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let field = FieldDescriptor::input("firstName", TextInputType::Text)
            .with_id("first-name")
            .with_label("First Name")
            .with_col(6)
            .full_width()
            .with_validation(ValidationRule::string().required("First name is required"));
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, field);
    }

    #[test]
    fn submit_round_trips_with_variant() {
        let field = FieldDescriptor::submit("submit", "Submit")
            .with_variant(SubmitVariant::Primary)
            .with_col(4)
            .full_width();
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, field);
    }

    #[test]
    fn builder_setters_only_touch_matching_controls() {
        let checkbox = FieldDescriptor::checkbox("terms").with_placeholder("ignored");
        assert_eq!(checkbox.control, FieldControl::Checkbox { inline: false });

        let inline = FieldDescriptor::checkbox("terms").inline();
        assert_eq!(inline.control, FieldControl::Checkbox { inline: true });
    }
}
