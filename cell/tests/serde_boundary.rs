use serde::{Deserialize, Serialize};
use serde_json::json;
use tracked_cell::MutationCell;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Parameter {
    #[serde(default, skip_serializing_if = "MutationCell::is_clean")]
    description: MutationCell<String>,
    #[serde(default, skip_serializing_if = "MutationCell::is_clean")]
    deprecated: MutationCell<bool>,
    #[serde(default)]
    example: MutationCell<Option<serde_json::Value>>,
    name: String,
}

#[test]
fn absent_key_leaves_cell_clean() {
    let param: Parameter = serde_json::from_value(json!({ "name": "id" })).unwrap();
    assert!(param.description.is_clean());
    assert!(param.deprecated.is_clean());
    assert!(param.example.is_clean());
}

#[test]
fn explicit_null_marks_cell_dirty() {
    let param: Parameter =
        serde_json::from_value(json!({ "name": "id", "deprecated": null, "example": null }))
            .unwrap();
    assert!(param.deprecated.is_dirty());
    assert!(!*param.deprecated.get());
    assert!(param.example.is_dirty());
    assert_eq!(*param.example.get(), None);
}

#[test]
fn present_value_marks_cell_dirty() {
    let param: Parameter =
        serde_json::from_value(json!({ "name": "id", "description": "primary key" })).unwrap();
    assert!(param.description.is_dirty());
    assert_eq!(param.description.get(), "primary key");
}

#[test]
fn type_mismatch_is_reported() {
    let err = serde_json::from_value::<Parameter>(json!({ "name": "id", "deprecated": "yes" }))
        .unwrap_err();
    assert!(err.is_data());
}

#[test]
fn encoding_has_no_wrapper() {
    let mut param = Parameter {
        name: "id".to_string(),
        ..Parameter::default()
    };
    param.description.set("primary key".to_string());
    param.deprecated.set(false);

    assert_eq!(
        serde_json::to_value(&param).unwrap(),
        json!({
            "description": "primary key",
            "deprecated": false,
            "example": null,
            "name": "id",
        })
    );
}

#[test]
fn parent_policy_decides_omission() {
    let param = Parameter {
        name: "id".to_string(),
        ..Parameter::default()
    };
    // `example` has no omission policy, so its clean default is still written.
    assert_eq!(
        serde_json::to_value(&param).unwrap(),
        json!({ "example": null, "name": "id" })
    );
}

#[test]
fn dirtiness_survives_a_round_trip_of_present_keys() {
    let mut original = Parameter {
        name: "id".to_string(),
        ..Parameter::default()
    };
    original.deprecated.set(false);

    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: Parameter = serde_json::from_str(&encoded).unwrap();

    assert!(decoded.deprecated.is_dirty());
    assert!(decoded.description.is_clean());
    // `example` was written as null, so it comes back dirty.
    assert!(decoded.example.is_dirty());
}

#[derive(Debug, Deserialize)]
struct NoDefault {
    name: MutationCell<String>,
    other: u8,
}

#[test]
fn absent_key_without_serde_default_reads_as_null() {
    // serde's derive routes a missing `Option`-like field through
    // `deserialize_option`; only `#[serde(default)]` keeps the cell clean.
    let decoded: NoDefault = serde_json::from_value(json!({ "other": 1 })).unwrap();
    assert_eq!(decoded.other, 1);
    assert!(decoded.name.is_dirty());
    assert_eq!(decoded.name.get(), "");
}
