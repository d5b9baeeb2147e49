//! Tests for serde integration and JSON round-trips.

use pathset::{Map, Value};
use serde_json::json;

use crate::helpers::{assert_root, root};

#[test]
fn test_deserialize_json_object_into_map() {
    let map = root(r#"{"name": "Alice", "age": 30, "tags": ["a", "b"], "extra": null}"#);

    assert_eq!(map.len(), 4);
    assert_eq!(map.get("name").and_then(|v| v.as_text()), Some("Alice"));
    assert_eq!(map.get("age").and_then(|v| v.as_int()), Some(30));
    assert!(map.get("extra").is_some_and(Value::is_null));

    let tags = map.get("tags").and_then(|v| v.as_list()).unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], Value::Text("a".into()));
}

#[test]
fn test_serialize_holes_as_null() {
    let mut map = Map::new();
    map.set_path("a[2]", 1).unwrap();
    assert_eq!(
        serde_json::to_string(map.get("a").unwrap()).unwrap(),
        "[null,null,1]"
    );
}

#[test]
fn test_round_trip_preserves_structure() {
    let original = r#"{"a": {"b": [1, null, {"c": true}]}, "d": "text", "e": 1.5}"#;
    let map = root(original);
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(
        json,
        json!({"a": {"b": [1, null, {"c": true}]}, "d": "text", "e": 1.5})
    );

    // A second trip through the document model is lossless.
    let again: Map = serde_json::from_value(json).unwrap();
    assert_eq!(again, map);
}

#[test]
fn test_deserialize_numbers() {
    let map = root(r#"{"small": 3, "negative": -7, "big": 18446744073709551615, "frac": 0.25}"#);

    assert_eq!(map.get("small").and_then(|v| v.as_int()), Some(3));
    assert_eq!(map.get("negative").and_then(|v| v.as_int()), Some(-7));
    // u64::MAX does not fit an i64 and falls back to float.
    assert!(map.get("big").is_some_and(|v| v.as_float().is_some()));
    assert_eq!(map.get("frac").and_then(|v| v.as_float()), Some(0.25));
}

#[test]
fn test_deserialize_value_directly() {
    let value: Value = serde_json::from_str(r#"[1, "two", null, {"k": false}]"#).unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0], Value::Int(1));
    assert_eq!(list[1], "two");
    assert!(list[2].is_null());
    assert_eq!(
        list[3].as_map().and_then(|m| m.get("k")).and_then(Value::as_bool),
        Some(false)
    );
}

#[test]
fn test_mutated_fixture_serializes_back() {
    let mut map = root(r#"{"config": {"retries": 3}}"#);
    map.set_path("config.endpoints[1].url", "https://example.com")
        .unwrap();
    assert_root(
        &map,
        json!({
            "config": {
                "retries": 3,
                "endpoints": [null, {"url": "https://example.com"}],
            }
        }),
    );
}
