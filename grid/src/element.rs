//! Field elements and their typed properties.
//!
//! A [`FieldElement`] is one cell of the form grid: a field type tag, display
//! metadata, and a [`FieldProperties`] value whose variant is determined by
//! the type tag. Properties are a real tagged union rather than an open JSON
//! bag, so renderers match on variants instead of probing string keys; the
//! persisted wire format stays the flat camelCase object the builder has
//! always saved (`firstName`, `addressLine1`, ...), bridged on deserialize
//! by [`FieldProperties::from_value`].

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::consts::DEFAULT_ELEMENT_WIDTH;
use crate::registry;

/// Unique identifier for a field element. The sole identity key used when
/// matching elements during reorder, delete, and update.
pub type FieldId = Uuid;

/// The closed set of field type tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Placeholder for a freshly inserted element whose type has not been
    /// chosen yet.
    #[default]
    #[serde(alias = "undefined")]
    Unset,
    /// Free text, single- or multi-line.
    Textbox,
    /// Person name with per-part toggles.
    Name,
    /// Postal address with per-line toggles.
    Address,
    /// Telephone number.
    Phone,
    /// Email address.
    Email,
    /// Masked password entry.
    Password,
    /// Calendar date.
    Date,
    /// Numeric entry.
    Number,
    /// Web address.
    Url,
    /// Single selection from a dropdown.
    Choices,
    /// Single selection from a radio group.
    Options,
    /// Multiple selection from a checkbox group.
    Checkboxes,
    /// Read-only computed value.
    Calculation,
    /// Signature capture area.
    Signature,
    /// File attachment.
    File,
}

impl FieldType {
    /// Every concrete type a user can pick from the palette, in display
    /// order. Excludes [`FieldType::Unset`].
    pub const ALL: [FieldType; 15] = [
        FieldType::Textbox,
        FieldType::Name,
        FieldType::Address,
        FieldType::Phone,
        FieldType::Email,
        FieldType::Password,
        FieldType::Date,
        FieldType::Number,
        FieldType::Url,
        FieldType::Choices,
        FieldType::Options,
        FieldType::Checkboxes,
        FieldType::Calculation,
        FieldType::Signature,
        FieldType::File,
    ];

    /// The lowercase tag used on the wire and as the icon asset key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Textbox => "textbox",
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Number => "number",
            Self::Url => "url",
            Self::Choices => "choices",
            Self::Options => "options",
            Self::Checkboxes => "checkboxes",
            Self::Calculation => "calculation",
            Self::Signature => "signature",
            Self::File => "file",
        }
    }

    /// Parse a wire tag back into a field type. Accepts the legacy
    /// `"undefined"` spelling of the placeholder tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "unset" | "undefined" => Some(Self::Unset),
            other => Self::ALL.into_iter().find(|t| t.as_str() == other),
        }
    }

    /// Icon asset lookup key. Advisory only — callers must degrade to a
    /// text-only control when no asset exists for the key.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific configuration carried by a [`FieldElement`].
///
/// One variant per property shape. Field types with identical property sets
/// share a variant (all stateless types use [`FieldProperties::Empty`], the
/// three choice-like types use [`FieldProperties::OptionList`]); the registry
/// is the single source of truth for which type owns which variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum FieldProperties {
    /// No configuration. Used by unset, phone, email, password, number, url,
    /// and signature fields.
    Empty {},
    /// Textbox configuration.
    Textbox {
        /// Render a multi-line textarea instead of a single-line input.
        multiline: bool,
    },
    /// Which parts of a person name are collected.
    Name {
        title: bool,
        first_name: bool,
        middle_initial: bool,
        middle_name: bool,
        last_name: bool,
        suffix: bool,
    },
    /// Which lines of a postal address are collected.
    Address {
        address_line1: bool,
        address_line2: bool,
        city: bool,
        state: bool,
        zip: bool,
    },
    /// Which parts of a date are collected.
    Date { day: bool, month: bool, year: bool },
    /// Ordered option labels for choices, options, and checkboxes fields.
    OptionList { options: Vec<String> },
    /// Formula evaluated by the fill-in renderer.
    Calculation { formula: String },
    /// Allowed file extensions for an upload field.
    File { allowed_file_types: Vec<String> },
}

impl FieldProperties {
    /// Rebuild a properties value from a persisted JSON object.
    ///
    /// The variant is chosen by `field_type`, never guessed from the JSON
    /// shape. Keys missing from `value` keep their registry defaults; keys
    /// the type does not define are dropped.
    #[must_use]
    pub fn from_value(field_type: FieldType, value: &Value) -> Self {
        let mut props = registry::default_properties_for(field_type);
        let Some(map) = value.as_object() else {
            return props;
        };
        match &mut props {
            Self::Empty {} => {}
            Self::Textbox { multiline } => {
                read_bool(map, "multiline", multiline);
            }
            Self::Name { title, first_name, middle_initial, middle_name, last_name, suffix } => {
                read_bool(map, "title", title);
                read_bool(map, "firstName", first_name);
                read_bool(map, "middleInitial", middle_initial);
                read_bool(map, "middleName", middle_name);
                read_bool(map, "lastName", last_name);
                read_bool(map, "suffix", suffix);
            }
            Self::Address { address_line1, address_line2, city, state, zip } => {
                read_bool(map, "addressLine1", address_line1);
                read_bool(map, "addressLine2", address_line2);
                read_bool(map, "city", city);
                read_bool(map, "state", state);
                read_bool(map, "zip", zip);
            }
            Self::Date { day, month, year } => {
                read_bool(map, "day", day);
                read_bool(map, "month", month);
                read_bool(map, "year", year);
            }
            Self::OptionList { options } => {
                read_string_list(map, "options", options);
            }
            Self::Calculation { formula } => {
                read_string(map, "formula", formula);
            }
            Self::File { allowed_file_types } => {
                read_string_list(map, "allowedFileTypes", allowed_file_types);
            }
        }
        props
    }

    /// The option labels, for the choice-like variants. Empty otherwise.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Self::OptionList { options } => options,
            _ => &[],
        }
    }

    /// Mutable option labels, for the choice-like variants.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Self::OptionList { options } => Some(options),
            _ => None,
        }
    }
}

fn read_bool(map: &serde_json::Map<String, Value>, key: &str, slot: &mut bool) {
    if let Some(v) = map.get(key).and_then(Value::as_bool) {
        *slot = v;
    }
}

fn read_string(map: &serde_json::Map<String, Value>, key: &str, slot: &mut String) {
    if let Some(v) = map.get(key).and_then(Value::as_str) {
        *slot = v.to_owned();
    }
}

fn read_string_list(map: &serde_json::Map<String, Value>, key: &str, slot: &mut Vec<String>) {
    if let Some(items) = map.get(key).and_then(Value::as_array) {
        *slot = items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();
    }
}

/// One form field: a cell of the form grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawFieldElement")]
pub struct FieldElement {
    /// Stable unique identifier, the sole identity key for this element.
    pub id: FieldId,
    /// Field type tag. Determines the [`FieldProperties`] variant.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display name shown above the field.
    pub label: String,
    /// Optional descriptive text shown under the label.
    pub help_text: String,
    /// Whether the fill-in renderer marks the field as mandatory.
    pub required: bool,
    /// Type-specific configuration.
    pub properties: FieldProperties,
    /// Column-width share as a percentage of the row (0–100).
    pub width: f64,
}

/// Deserialization mirror of [`FieldElement`]: `properties` arrives as raw
/// JSON and is decoded against the `type` tag, so a document saved with
/// stale or missing property keys still loads into a well-formed element.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldElement {
    id: FieldId,
    #[serde(rename = "type", default)]
    field_type: FieldType,
    #[serde(default)]
    label: String,
    #[serde(default)]
    help_text: String,
    #[serde(default = "default_required")]
    required: bool,
    #[serde(default)]
    properties: Value,
    #[serde(default = "default_width")]
    width: f64,
}

fn default_required() -> bool {
    true
}

fn default_width() -> f64 {
    DEFAULT_ELEMENT_WIDTH
}

impl From<RawFieldElement> for FieldElement {
    fn from(raw: RawFieldElement) -> Self {
        Self {
            id: raw.id,
            field_type: raw.field_type,
            label: raw.label,
            help_text: raw.help_text,
            required: raw.required,
            properties: FieldProperties::from_value(raw.field_type, &raw.properties),
            width: raw.width,
        }
    }
}
