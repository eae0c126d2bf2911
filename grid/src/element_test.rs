use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::registry;

fn element_of(field_type: FieldType) -> FieldElement {
    registry::default_element(field_type)
}

// =============================================================
// FieldType serde
// =============================================================

#[test]
fn type_serializes_lowercase() {
    let json = serde_json::to_string(&FieldType::Textbox).unwrap();
    assert_eq!(json, "\"textbox\"");
    let back: FieldType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, FieldType::Textbox);
}

#[test]
fn type_serde_all_variants() {
    let cases = [
        (FieldType::Unset, "\"unset\""),
        (FieldType::Textbox, "\"textbox\""),
        (FieldType::Name, "\"name\""),
        (FieldType::Address, "\"address\""),
        (FieldType::Phone, "\"phone\""),
        (FieldType::Email, "\"email\""),
        (FieldType::Password, "\"password\""),
        (FieldType::Date, "\"date\""),
        (FieldType::Number, "\"number\""),
        (FieldType::Url, "\"url\""),
        (FieldType::Choices, "\"choices\""),
        (FieldType::Options, "\"options\""),
        (FieldType::Checkboxes, "\"checkboxes\""),
        (FieldType::Calculation, "\"calculation\""),
        (FieldType::Signature, "\"signature\""),
        (FieldType::File, "\"file\""),
    ];
    for (field_type, expected) in cases {
        assert_eq!(serde_json::to_string(&field_type).unwrap(), expected);
        let back: FieldType = serde_json::from_str(expected).unwrap();
        assert_eq!(back, field_type);
    }
}

#[test]
fn type_accepts_legacy_undefined_tag() {
    let back: FieldType = serde_json::from_str("\"undefined\"").unwrap();
    assert_eq!(back, FieldType::Unset);
}

#[test]
fn type_rejects_unknown_tag() {
    assert!(serde_json::from_str::<FieldType>("\"dropdown\"").is_err());
}

#[test]
fn type_as_str_matches_wire_tag() {
    for field_type in FieldType::ALL {
        let tag = serde_json::to_string(&field_type).unwrap();
        assert_eq!(tag, format!("\"{field_type}\""));
    }
}

#[test]
fn type_all_excludes_unset() {
    assert!(!FieldType::ALL.contains(&FieldType::Unset));
    assert_eq!(FieldType::ALL.len(), 15);
}

#[test]
fn from_tag_parses_every_tag() {
    for field_type in FieldType::ALL {
        assert_eq!(FieldType::from_tag(field_type.as_str()), Some(field_type));
    }
    assert_eq!(FieldType::from_tag("unset"), Some(FieldType::Unset));
    assert_eq!(FieldType::from_tag("undefined"), Some(FieldType::Unset));
    assert_eq!(FieldType::from_tag("dropdown"), None);
}

#[test]
fn icon_name_is_wire_tag() {
    assert_eq!(FieldType::Checkboxes.icon_name(), "checkboxes");
    assert_eq!(FieldType::Unset.icon_name(), "unset");
}

// =============================================================
// FieldProperties serialization
// =============================================================

#[test]
fn empty_properties_serialize_as_empty_object() {
    let value = serde_json::to_value(FieldProperties::Empty {}).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn name_properties_serialize_camel_case() {
    let value = serde_json::to_value(registry::default_properties_for(FieldType::Name)).unwrap();
    assert_eq!(
        value,
        json!({
            "title": false,
            "firstName": true,
            "middleInitial": false,
            "middleName": false,
            "lastName": true,
            "suffix": false,
        })
    );
}

#[test]
fn address_properties_serialize_camel_case() {
    let value = serde_json::to_value(registry::default_properties_for(FieldType::Address)).unwrap();
    assert_eq!(
        value,
        json!({
            "addressLine1": true,
            "addressLine2": true,
            "city": true,
            "state": true,
            "zip": true,
        })
    );
}

#[test]
fn file_properties_serialize_camel_case() {
    let value = serde_json::to_value(registry::default_properties_for(FieldType::File)).unwrap();
    assert_eq!(value, json!({ "allowedFileTypes": [".txt"] }));
}

// =============================================================
// FieldProperties::from_value
// =============================================================

#[test]
fn from_value_full_object() {
    let props = FieldProperties::from_value(
        FieldType::Name,
        &json!({
            "title": true,
            "firstName": false,
            "middleInitial": true,
            "middleName": true,
            "lastName": false,
            "suffix": true,
        }),
    );
    assert_eq!(
        props,
        FieldProperties::Name {
            title: true,
            first_name: false,
            middle_initial: true,
            middle_name: true,
            last_name: false,
            suffix: true,
        }
    );
}

#[test]
fn from_value_missing_keys_take_defaults() {
    let props = FieldProperties::from_value(FieldType::Name, &json!({ "suffix": true }));
    assert_eq!(
        props,
        FieldProperties::Name {
            title: false,
            first_name: true,
            middle_initial: false,
            middle_name: false,
            last_name: true,
            suffix: true,
        }
    );
}

#[test]
fn from_value_drops_keys_of_other_types() {
    // A document saved while the element was a name field, then retagged as
    // a textbox, must come back with textbox keys only.
    let props = FieldProperties::from_value(
        FieldType::Textbox,
        &json!({ "firstName": true, "lastName": true, "multiline": true }),
    );
    assert_eq!(props, FieldProperties::Textbox { multiline: true });
}

#[test]
fn from_value_non_object_uses_defaults() {
    let props = FieldProperties::from_value(FieldType::Checkboxes, &json!(null));
    assert_eq!(props, registry::default_properties_for(FieldType::Checkboxes));
}

#[test]
fn from_value_wrong_value_type_keeps_default() {
    let props = FieldProperties::from_value(FieldType::Textbox, &json!({ "multiline": "yes" }));
    assert_eq!(props, FieldProperties::Textbox { multiline: false });
}

#[test]
fn from_value_options_list() {
    let props =
        FieldProperties::from_value(FieldType::Choices, &json!({ "options": ["Red", "Blue"] }));
    assert_eq!(props.options(), ["Red".to_owned(), "Blue".to_owned()]);
}

#[test]
fn from_value_options_skips_non_string_entries() {
    let props =
        FieldProperties::from_value(FieldType::Options, &json!({ "options": ["Red", 7, "Blue"] }));
    assert_eq!(props.options(), ["Red".to_owned(), "Blue".to_owned()]);
}

#[test]
fn from_value_calculation_formula() {
    let props =
        FieldProperties::from_value(FieldType::Calculation, &json!({ "formula": "a + b" }));
    assert_eq!(props, FieldProperties::Calculation { formula: "a + b".to_owned() });
}

#[test]
fn options_accessor_empty_for_non_list_variants() {
    assert!(registry::default_properties_for(FieldType::Phone).options().is_empty());
    assert!(registry::default_properties_for(FieldType::Name).options().is_empty());
}

#[test]
fn options_mut_only_for_list_variants() {
    let mut props = registry::default_properties_for(FieldType::Checkboxes);
    props.options_mut().unwrap().push("Choice D".to_owned());
    assert_eq!(props.options().len(), 4);
    assert!(registry::default_properties_for(FieldType::Email).options_mut().is_none());
}

// =============================================================
// FieldElement serde
// =============================================================

#[test]
fn element_roundtrip_preserves_type_and_properties() {
    let mut element = element_of(FieldType::Checkboxes);
    element.help_text = "Pick several".to_owned();
    element.width = 25.0;
    let serialized = serde_json::to_string(&element).unwrap();
    let back: FieldElement = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, element);
}

#[test]
fn element_serializes_camel_case_keys() {
    let element = element_of(FieldType::Textbox);
    let value = serde_json::to_value(&element).unwrap();
    assert!(value.get("type").is_some());
    assert!(value.get("helpText").is_some());
    assert!(value.get("fieldType").is_none());
    assert_eq!(value["properties"], json!({ "multiline": false }));
}

#[test]
fn element_deserializes_persisted_wire_shape() {
    let id = Uuid::new_v4();
    let raw = json!({
        "id": id,
        "type": "name",
        "label": "Full Name",
        "helpText": "",
        "required": true,
        "properties": { "firstName": true, "lastName": true },
        "width": 50,
    });
    let element: FieldElement = serde_json::from_value(raw).unwrap();
    assert_eq!(element.id, id);
    assert_eq!(element.field_type, FieldType::Name);
    assert_eq!(element.label, "Full Name");
    assert!((element.width - 50.0).abs() < f64::EPSILON);
    assert_eq!(element.properties, registry::default_properties_for(FieldType::Name));
}

#[test]
fn element_deserialize_defaults_missing_fields() {
    let raw = json!({ "id": Uuid::new_v4(), "type": "email" });
    let element: FieldElement = serde_json::from_value(raw).unwrap();
    assert!(element.required);
    assert!(element.label.is_empty());
    assert!(element.help_text.is_empty());
    assert!((element.width - crate::consts::DEFAULT_ELEMENT_WIDTH).abs() < f64::EPSILON);
    assert_eq!(element.properties, FieldProperties::Empty {});
}

#[test]
fn element_deserialize_missing_type_is_unset() {
    let raw = json!({ "id": Uuid::new_v4() });
    let element: FieldElement = serde_json::from_value(raw).unwrap();
    assert_eq!(element.field_type, FieldType::Unset);
}

#[test]
fn element_deserialize_properties_follow_type_not_shape() {
    // The same all-bool object means different things under different tags.
    let raw = json!({
        "id": Uuid::new_v4(),
        "type": "address",
        "properties": { "city": false, "zip": false },
    });
    let element: FieldElement = serde_json::from_value(raw).unwrap();
    assert_eq!(
        element.properties,
        FieldProperties::Address {
            address_line1: true,
            address_line2: true,
            city: false,
            state: true,
            zip: false,
        }
    );
}
