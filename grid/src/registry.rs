//! Field type registry: per-type defaults for labels, properties, and
//! freshly created elements.
//!
//! Everything here is a total, pure function over the closed
//! [`FieldType`] set — no side effects, no failure modes. This module is the
//! single source of truth for which [`FieldProperties`] variant a field type
//! owns and what a brand-new element of that type looks like.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use uuid::Uuid;

use crate::consts::{DEFAULT_ELEMENT_WIDTH, DEFAULT_FILE_TYPES, SEEDED_OPTIONS};
use crate::element::{FieldElement, FieldProperties, FieldType};

/// Produce a new element of the given type: fresh unique id, the type's
/// canonical default label, required, empty help text, default width, and
/// [`default_properties_for`] properties.
#[must_use]
pub fn default_element(field_type: FieldType) -> FieldElement {
    FieldElement {
        id: Uuid::new_v4(),
        field_type,
        label: default_label(field_type).to_owned(),
        help_text: String::new(),
        required: true,
        properties: default_properties_for(field_type),
        width: DEFAULT_ELEMENT_WIDTH,
    }
}

/// Produce the placeholder element used by row/column insertion, before the
/// user has picked a concrete type.
#[must_use]
pub fn placeholder_element() -> FieldElement {
    default_element(FieldType::Unset)
}

/// The canonical default label for a field type.
#[must_use]
pub fn default_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Unset | FieldType::Textbox => "Untitled",
        FieldType::Name => "Name",
        FieldType::Address => "Address",
        FieldType::Phone => "Phone Number",
        FieldType::Email => "Email Address",
        FieldType::Password => "Password",
        FieldType::Date => "Date",
        FieldType::Number => "Number",
        FieldType::Url => "URL",
        FieldType::Choices => "Choices",
        FieldType::Options => "Options",
        FieldType::Checkboxes => "Checkboxes",
        FieldType::Calculation => "Calculation",
        FieldType::Signature => "Signature",
        FieldType::File => "File",
    }
}

/// The default properties for a field type.
///
/// Stateless types get [`FieldProperties::Empty`], the structural types get
/// their sub-field toggle sets, and the choice-like types get the seeded
/// option list.
#[must_use]
pub fn default_properties_for(field_type: FieldType) -> FieldProperties {
    match field_type {
        FieldType::Unset
        | FieldType::Phone
        | FieldType::Email
        | FieldType::Password
        | FieldType::Number
        | FieldType::Url
        | FieldType::Signature => FieldProperties::Empty {},
        FieldType::Textbox => FieldProperties::Textbox { multiline: false },
        FieldType::Name => FieldProperties::Name {
            title: false,
            first_name: true,
            middle_initial: false,
            middle_name: false,
            last_name: true,
            suffix: false,
        },
        FieldType::Address => FieldProperties::Address {
            address_line1: true,
            address_line2: true,
            city: true,
            state: true,
            zip: true,
        },
        FieldType::Date => FieldProperties::Date { day: true, month: true, year: true },
        FieldType::Choices | FieldType::Options | FieldType::Checkboxes => {
            FieldProperties::OptionList {
                options: SEEDED_OPTIONS.iter().map(|s| (*s).to_owned()).collect(),
            }
        }
        FieldType::Calculation => FieldProperties::Calculation { formula: String::new() },
        FieldType::File => FieldProperties::File {
            allowed_file_types: DEFAULT_FILE_TYPES.iter().map(|s| (*s).to_owned()).collect(),
        },
    }
}
