use serde_json::json;

use super::*;

#[test]
fn request_serializes_expected_field_names() {
    let mut vars = VariableMap::new();
    vars.insert("x".into(), "5".into());
    let body = CalculateRequest { image: "data:image/png;base64,AAAA", dict_of_vars: &vars };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, json!({ "image": "data:image/png;base64,AAAA", "dict_of_vars": { "x": "5" } }));
}

#[test]
fn request_with_empty_dictionary_sends_empty_object() {
    let vars = VariableMap::new();
    let value = serde_json::to_value(CalculateRequest { image: "img", dict_of_vars: &vars }).unwrap();
    assert_eq!(value["dict_of_vars"], json!({}));
}

#[test]
fn parse_response_keeps_entry_order() {
    let body = json!({
        "data": [
            { "expr": "x", "result": "5", "assign": true },
            { "expr": "2+2", "result": "4", "assign": false },
        ]
    })
    .to_string();
    let entries = parse_response(&body).unwrap();
    assert_eq!(
        entries,
        vec![
            ResponseEntry { expr: "x".into(), result: "5".into(), assign: true },
            ResponseEntry { expr: "2+2".into(), result: "4".into(), assign: false },
        ]
    );
}

#[test]
fn parse_response_accepts_empty_batch() {
    assert!(parse_response(r#"{"data": []}"#).unwrap().is_empty());
}

#[test]
fn parse_response_coerces_numeric_and_bool_values_to_text() {
    let body = r#"{"data": [{"expr": "3*3", "result": 9, "assign": false}, {"expr": 1.5, "result": true}]}"#;
    let entries = parse_response(body).unwrap();
    assert_eq!(entries[0].result, "9");
    assert_eq!(entries[1].expr, "1.5");
    assert_eq!(entries[1].result, "true");
}

#[test]
fn parse_response_defaults_missing_assign_to_false() {
    let entries = parse_response(r#"{"data": [{"expr": "1+1", "result": "2"}]}"#).unwrap();
    assert!(!entries[0].assign);
}

#[test]
fn parse_response_rejects_missing_data() {
    assert!(parse_response(r#"{"message": "ok"}"#).is_err());
}

#[test]
fn parse_response_rejects_non_text_values() {
    assert!(parse_response(r#"{"data": [{"expr": null, "result": "2"}]}"#).is_err());
    assert!(parse_response(r#"{"data": [{"expr": "a", "result": [1, 2]}]}"#).is_err());
}

#[test]
fn parse_response_rejects_garbage() {
    assert!(parse_response("<html>502</html>").is_err());
}
