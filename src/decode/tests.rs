//! Tests for decoder module

use super::*;
use crate::types::JsonValue;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn sample_records() -> Vec<JsonValue> {
    vec![
        json!({"Id": 1, "Name": "Alpha"}),
        json!({"Id": 2, "Name": "Beta"}),
    ]
}

#[test]
fn test_decode_body_json_object() {
    let decoded = decode_body(r#"{"Items": []}"#);
    assert_eq!(decoded, DecodedBody::Json(json!({"Items": []})));
}

#[test]
fn test_decode_body_json_array() {
    let decoded = decode_body("[1, 2, 3]");
    assert_eq!(decoded.as_json(), Some(&json!([1, 2, 3])));
}

#[test]
fn test_decode_body_plain_text_kept_verbatim() {
    let decoded = decode_body("Internal Server Error");
    assert_eq!(
        decoded,
        DecodedBody::Text("Internal Server Error".to_string())
    );
    assert!(decoded.as_json().is_none());
}

#[test_case(json!(sample_records()), Envelope::BareList; "bare list")]
#[test_case(json!({"Items": sample_records()}), Envelope::ItemsWrapped; "items wrapped")]
#[test_case(json!({"result": sample_records()}), Envelope::ResultWrapped; "result wrapped")]
#[test_case(json!({"List": sample_records()}), Envelope::ListWrapped; "list wrapped")]
fn test_classify_envelope(value: JsonValue, expected: Envelope) {
    assert_eq!(classify_envelope(&value), expected);
}

#[test_case(json!(sample_records()); "bare list")]
#[test_case(json!({"Items": sample_records()}); "items wrapped")]
#[test_case(json!({"result": sample_records()}); "result wrapped")]
#[test_case(json!({"List": sample_records()}); "list wrapped")]
fn test_extract_list_same_records_for_all_envelopes(wrapped: JsonValue) {
    assert_eq!(extract_list(&wrapped), sample_records());
}

#[test]
fn test_extract_list_empty_list() {
    assert_eq!(extract_list(&json!({"Items": []})), Vec::<JsonValue>::new());
}

#[test]
fn test_unknown_shape_is_explicit_and_empty() {
    let value = json!({"Total": 3, "Page": 1});
    assert_eq!(classify_envelope(&value), Envelope::Unknown);
    assert_eq!(extract_list(&value), Vec::<JsonValue>::new());

    assert_eq!(classify_envelope(&json!("text")), Envelope::Unknown);
    assert_eq!(classify_envelope(&json!(null)), Envelope::Unknown);
}

#[test]
fn test_keyed_envelope_requires_array_value() {
    // An "Items" key holding a non-array does not count as an envelope
    let value = json!({"Items": "not a list", "result": sample_records()});
    assert_eq!(classify_envelope(&value), Envelope::ResultWrapped);
    assert_eq!(extract_list(&value), sample_records());
}

#[test]
fn test_envelope_precedence_items_over_result() {
    let value = json!({
        "Items": sample_records(),
        "result": [{"Id": 99}],
    });
    assert_eq!(classify_envelope(&value), Envelope::ItemsWrapped);
    assert_eq!(extract_list(&value), sample_records());
}
