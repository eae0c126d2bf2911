//! Field type → sub-control dispatch, shared by every rendering context.
//!
//! [`control_rows`] maps an element's `(type, properties)` pair to the
//! ordered sub-controls a renderer displays. The builder preview, the
//! fill-in page, and the read-only preview/viewer all consume this one
//! table; a given pair always yields the same control set and order, and
//! only interactivity differs by [`RenderContext`]. Renderers must never
//! grow their own per-type branching on top of this.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use crate::element::{FieldElement, FieldProperties, FieldType};

/// Which consumer is rendering the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    /// The builder canvas: interactive, shows structural placeholders for
    /// unset elements.
    Builder,
    /// The fill-in page: interactive, empty inputs awaiting submission data.
    Fill,
    /// The pre-publish preview: disabled controls with placeholder text.
    Preview,
    /// The read-only viewer: disabled controls, no data entry.
    Viewer,
}

impl RenderContext {
    /// Whether controls accept input in this context.
    #[must_use]
    pub fn interactive(self) -> bool {
        matches!(self, Self::Builder | Self::Fill)
    }
}

/// What kind of control to render for one sub-field.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Multi-line textarea.
    Textarea,
    /// Telephone input.
    Tel,
    /// Email input.
    Email,
    /// Masked password input.
    Password,
    /// Calendar date input.
    Date,
    /// Numeric input.
    Number,
    /// URL input.
    Url,
    /// Dropdown populated from the element's options.
    Select {
        /// Option labels in document order.
        options: Vec<String>,
    },
    /// One radio button for a single option.
    Radio {
        /// The option label this button represents.
        value: String,
    },
    /// One checkbox for a single option.
    Checkbox {
        /// The option label this box represents.
        value: String,
    },
    /// Read-only computed result box.
    Calculation {
        /// The formula whose result is displayed.
        formula: String,
    },
    /// Signature capture area.
    Signature,
    /// Attach-file control.
    FileAttach,
    /// Structural placeholder for an element with no type yet.
    Placeholder,
}

/// One sub-control of a rendered field.
#[derive(Debug, Clone, PartialEq)]
pub struct SubControl {
    /// The control to render.
    pub kind: ControlKind,
    /// Canonical placeholder text, identical in every context.
    pub placeholder: &'static str,
    /// Input group name, for controls that share one (radio/checkbox
    /// groups use the owning element's id).
    pub group: Option<String>,
}

impl SubControl {
    fn new(kind: ControlKind, placeholder: &'static str) -> Self {
        Self { kind, placeholder, group: None }
    }

    fn grouped(kind: ControlKind, group: String) -> Self {
        Self { kind, placeholder: "", group: Some(group) }
    }
}

/// One visual row of sub-controls, rendered left to right.
pub type ControlRow = Vec<SubControl>;

/// The ordered sub-control rows for an element.
///
/// Pure over `(type, properties)`; the [`RenderContext`] is deliberately not
/// a parameter so the table cannot diverge between consumers.
#[must_use]
pub fn control_rows(element: &FieldElement) -> Vec<ControlRow> {
    match &element.properties {
        FieldProperties::Textbox { multiline } => {
            if *multiline {
                vec![vec![SubControl::new(ControlKind::Textarea, "Enter text")]]
            } else {
                vec![vec![SubControl::new(ControlKind::Text, "Enter text")]]
            }
        }
        FieldProperties::Name { title, first_name, middle_initial, middle_name, last_name, suffix } => {
            // Fixed left-to-right part order, truthy parts only.
            let parts = [
                (*title, "Title"),
                (*first_name, "First"),
                (*middle_initial, "M."),
                (*middle_name, "Middle"),
                (*last_name, "Last"),
                (*suffix, "Suffix"),
            ];
            let row: ControlRow = parts
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, placeholder)| SubControl::new(ControlKind::Text, placeholder))
                .collect();
            vec![row]
        }
        FieldProperties::Address { address_line1, address_line2, city, state, zip } => {
            // Lines stack, then state and zip share the final row.
            let mut rows: Vec<ControlRow> = Vec::new();
            if *address_line1 {
                rows.push(vec![SubControl::new(ControlKind::Text, "Address Line 1")]);
            }
            if *address_line2 {
                rows.push(vec![SubControl::new(ControlKind::Text, "Address Line 2")]);
            }
            if *city {
                rows.push(vec![SubControl::new(ControlKind::Text, "City")]);
            }
            let mut last_row: ControlRow = Vec::new();
            if *state {
                last_row.push(SubControl::new(ControlKind::Text, "State"));
            }
            if *zip {
                last_row.push(SubControl::new(ControlKind::Text, "Zip"));
            }
            if !last_row.is_empty() {
                rows.push(last_row);
            }
            rows
        }
        FieldProperties::Date { .. } => {
            vec![vec![SubControl::new(ControlKind::Date, "")]]
        }
        FieldProperties::OptionList { options } => option_rows(element, options),
        FieldProperties::Calculation { formula } => {
            vec![vec![SubControl::new(
                ControlKind::Calculation { formula: formula.clone() },
                "No formula defined",
            )]]
        }
        FieldProperties::File { .. } => {
            vec![vec![SubControl::new(ControlKind::FileAttach, "No file chosen")]]
        }
        FieldProperties::Empty {} => {
            let control = match element.field_type {
                FieldType::Phone => SubControl::new(ControlKind::Tel, "Enter phone number"),
                FieldType::Email => SubControl::new(ControlKind::Email, "me@example.com"),
                FieldType::Password => {
                    SubControl::new(ControlKind::Password, "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}")
                }
                FieldType::Number => SubControl::new(ControlKind::Number, "Enter number"),
                FieldType::Url => SubControl::new(ControlKind::Url, "https://example.com/"),
                FieldType::Signature => SubControl::new(ControlKind::Signature, "Signature Field"),
                _ => SubControl::new(ControlKind::Placeholder, "Undefined"),
            };
            vec![vec![control]]
        }
    }
}

/// Rows for the three choice-like types. Choices renders one select; options
/// and checkboxes render one control per option, grouped under the element
/// id so a radio group selects exclusively.
fn option_rows(element: &FieldElement, options: &[String]) -> Vec<ControlRow> {
    match element.field_type {
        FieldType::Choices => {
            vec![vec![SubControl::new(
                ControlKind::Select { options: options.to_vec() },
                "",
            )]]
        }
        FieldType::Options => options
            .iter()
            .map(|option| {
                vec![SubControl::grouped(
                    ControlKind::Radio { value: option.clone() },
                    element.id.to_string(),
                )]
            })
            .collect(),
        FieldType::Checkboxes => options
            .iter()
            .map(|option| {
                vec![SubControl::grouped(
                    ControlKind::Checkbox { value: option.clone() },
                    element.id.to_string(),
                )]
            })
            .collect(),
        // OptionList properties only ever belong to the three types above;
        // anything else renders nothing rather than guessing.
        _ => Vec::new(),
    }
}
