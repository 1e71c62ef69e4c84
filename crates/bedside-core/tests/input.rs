use bedside_core::models::editorial::EditorialMetadata;
use bedside_core::models::input::{flag, number, InputValue, Inputs};

#[test]
fn json_booleans_and_numbers_deserialize_to_matching_variants() {
    let inputs: Inputs =
        serde_json::from_str(r#"{"fever": true, "cough": false, "age": 47, "temp": 38.2}"#)
            .unwrap();

    assert_eq!(inputs["fever"], InputValue::Flag(true));
    assert_eq!(inputs["cough"], InputValue::Flag(false));
    assert_eq!(inputs["age"], InputValue::Number(47.0));
    assert_eq!(inputs["temp"], InputValue::Number(38.2));
}

#[test]
fn flags_read_as_one_or_zero() {
    assert_eq!(InputValue::Flag(true).as_number(), 1.0);
    assert_eq!(InputValue::Flag(false).as_number(), 0.0);
    assert_eq!(InputValue::Number(-2.5).as_number(), -2.5);
}

#[test]
fn zero_number_is_not_set() {
    assert!(!InputValue::Number(0.0).is_set());
    assert!(InputValue::Number(3.0).is_set());
    assert!(InputValue::Flag(true).is_set());
    assert!(!InputValue::Flag(false).is_set());
}

#[test]
fn absent_fields_read_as_zero_and_unset() {
    let mut inputs = Inputs::new();
    inputs.insert("hdl".to_string(), 50.0.into());
    inputs.insert("female".to_string(), true.into());

    assert_eq!(number(&inputs, "hdl"), 50.0);
    assert_eq!(number(&inputs, "ldl"), 0.0);
    assert!(flag(&inputs, "female"));
    assert!(!flag(&inputs, "dialysis"));
}

#[test]
fn editorial_metadata_survives_serialization_unchanged() {
    let json = r#"{
        "content_id": "2f7c1f8e-3d65-4f6b-9a57-0b1e9b9f5c11",
        "version": 3,
        "author": "J. Okafor",
        "reviewer": null,
        "published_on": "2025-03-14"
    }"#;

    let meta: EditorialMetadata = serde_json::from_str(json).unwrap();
    assert_eq!(meta.version, 3);
    assert_eq!(meta.published_on, Some(jiff::civil::date(2025, 3, 14)));

    let back: EditorialMetadata =
        serde_json::from_value(serde_json::to_value(&meta).unwrap()).unwrap();
    assert_eq!(back, meta);
}
