//! End-to-end tests for the path mutation entry points.
//!
//! Fixtures and expectations are JSON literals; roots are compared
//! structurally after every call so sibling preservation and hole padding
//! are always checked, not just the targeted slot.

use pathset::{Error, Map, SetError, Value};
use serde_json::json;

use crate::helpers::{assert_root, root};

// ===== VALIDATION =====

#[test]
fn test_rejected_paths_leave_root_unchanged() {
    for path in ["", "[0]", "0", "0.a", "[0].a", ".a", "-3.b"] {
        let mut map = Map::new();
        let err = map.set_path(path, 1).unwrap_err();
        assert!(err.is_invalid_path(), "path {path:?}: unexpected {err:?}");
        assert_root(&map, json!({}));
    }
}

#[test]
fn test_set_path_on_non_map_root() {
    let mut leaf = Value::Int(1);
    let err = leaf.set_path("a", 10).unwrap_err();
    assert!(matches!(
        err,
        Error::Set(SetError::RootNotAMap { actual: "int" })
    ));
    assert_eq!(err.to_string(), "cannot set a path on int root: not a map");

    let mut list = Value::List(pathset::List::new());
    assert!(list.set_path("a", 10).unwrap_err().is_root_error());
}

#[test]
fn test_set_path_on_map_valued_root() {
    let mut value = Value::Map(Map::new());
    value.set_path("a.b", 100).unwrap();

    let map = value.as_map().unwrap();
    assert_root(map, json!({"a": {"b": 100}}));
}

#[test]
fn test_negative_index_is_a_defined_error() {
    let mut map = root(r#"{"a": 1}"#);
    let err = map.set_path("a.-1.b", 5).unwrap_err();
    assert!(err.is_index_error());
    assert_eq!(
        err.to_string(),
        "negative index '-1' in path: lists cannot grow backwards"
    );
    // No partial mutation.
    assert_root(&map, json!({"a": 1}));
}

// ===== BASIC SETS =====

#[test]
fn test_set_single_key() {
    let mut map = Map::new();
    map.set_path("a", 10).unwrap();
    assert_root(&map, json!({"a": 10}));
}

#[test]
fn test_set_nested_keys() {
    let mut map = Map::new();
    map.set_path("a.b", 100).unwrap();
    assert_root(&map, json!({"a": {"b": 100}}));

    let mut map = Map::new();
    map.set_path("a.b.c.d", true).unwrap();
    assert_root(&map, json!({"a": {"b": {"c": {"d": true}}}}));
}

#[test]
fn test_bracket_and_dot_index_syntax_agree() {
    for path in ["a[0]", "a.0"] {
        let mut map = Map::new();
        map.set_path(path, 5).unwrap();
        assert_root(&map, json!({"a": [5]}));
    }

    for path in ["a[0].b", "a.0.b"] {
        let mut map = Map::new();
        map.set_path(path, 10).unwrap();
        assert_root(&map, json!({"a": [{"b": 10}]}));
    }
}

#[test]
fn test_index_growth_pads_with_holes() {
    for path in ["a[3].c", "a.3.c"] {
        let mut map = Map::new();
        map.set_path(path, "test").unwrap();
        assert_root(&map, json!({"a": [null, null, null, {"c": "test"}]}));
    }
}

#[test]
fn test_container_values_can_be_set() {
    let mut map = Map::new();
    map.set_path("a.b.c", json!({})).unwrap();
    assert_root(&map, json!({"a": {"b": {"c": {}}}}));

    let mut map = Map::new();
    map.set_path("a.b.c", json!([])).unwrap();
    assert_root(&map, json!({"a": {"b": {"c": []}}}));
}

// ===== INTERLEAVED MAP/LIST CHAINS =====

#[test]
fn test_interleaved_chains() {
    let mut map = Map::new();
    map.set_path("a[2].b[1]", 1).unwrap();
    assert_root(&map, json!({"a": [null, null, {"b": [null, 1]}]}));

    let mut map = Map::new();
    map.set_path("a[2].b[1].c[0]", 1).unwrap();
    assert_root(&map, json!({"a": [null, null, {"b": [null, {"c": [1]}]}]}));

    let mut map = Map::new();
    map.set_path("a[0].b[0].c", 2).unwrap();
    assert_root(&map, json!({"a": [{"b": [{"c": 2}]}]}));

    let mut map = Map::new();
    map.set_path("a[0].b.c[0]", 3).unwrap();
    assert_root(&map, json!({"a": [{"b": {"c": [3]}}]}));

    let mut map = Map::new();
    map.set_path("a[0].b.c[0].d", 4).unwrap();
    assert_root(&map, json!({"a": [{"b": {"c": [{"d": 4}]}}]}));
}

#[test]
fn test_deep_interleaved_chain() {
    let mut map = Map::new();
    map.set_path("a[0].b[1].c[2].d[3]", 5).unwrap();
    assert_root(
        &map,
        json!({"a": [{"b": [null, {"c": [null, null, {"d": [null, null, null, 5]}]}]}]}),
    );

    let mut map = Map::new();
    map.set_path("a[0].b[1].c[2].d[3].e", 6).unwrap();
    assert_root(
        &map,
        json!({"a": [{"b": [null, {"c": [null, null, {"d": [null, null, null, {"e": 6}]}]}]}]}),
    );
}

#[test]
fn test_directly_nested_lists() {
    let mut map = Map::new();
    map.set_path("a.0.0.0.b", 10).unwrap();
    assert_root(&map, json!({"a": [[[{"b": 10}]]]}));
}

#[test]
fn test_dotted_index_chain() {
    let mut map = Map::new();
    map.set_path("a.0.b.1.c.2.d", 5).unwrap();
    assert_root(
        &map,
        json!({"a": [{"b": [null, {"c": [null, null, {"d": 5}]}]}]}),
    );
}

// ===== MERGING INTO EXISTING STRUCTURES =====

#[test]
fn test_overwrite_existing_leaf() {
    let mut map = root(r#"{"a": 1, "b": 2}"#);
    map.set_path("a", 10).unwrap();
    assert_root(&map, json!({"a": 10, "b": 2}));
}

#[test]
fn test_add_sibling_key() {
    let mut map = root(r#"{"a": 1, "b": 2}"#);
    map.set_path("c", 10).unwrap();
    assert_root(&map, json!({"a": 1, "b": 2, "c": 10}));
}

#[test]
fn test_deeper_path_replaces_leaf_with_container() {
    let mut map = root(r#"{"a": 1, "b": 2}"#);
    map.set_path("a.c", 10).unwrap();
    assert_root(&map, json!({"a": {"c": 10}, "b": 2}));
}

#[test]
fn test_non_destructive_merge_preserves_siblings() {
    let mut map = root(r#"{"a": {"b": {"d": 5}}}"#);
    map.set_path("a.b.c", 10).unwrap();
    assert_root(&map, json!({"a": {"b": {"c": 10, "d": 5}}}));
}

#[test]
fn test_list_extension_preserves_earlier_elements() {
    let mut map = root(r#"{"a": [{"b": 2}]}"#);
    map.set_path("a.1.c", 10).unwrap();
    assert_root(&map, json!({"a": [{"b": 2}, {"c": 10}]}));

    let mut map = root(r#"{"a": [{"b": 2}]}"#);
    map.set_path("a.2.c", 10).unwrap();
    assert_root(&map, json!({"a": [{"b": 2}, null, {"c": 10}]}));
}

#[test]
fn test_sibling_writes_into_same_list_slot() {
    let mut map = Map::new();
    map.set_path("a[1].x", 1).unwrap();
    map.set_path("a[1].y", 2).unwrap();
    map.set_path("a[0]", "first").unwrap();
    assert_root(&map, json!({"a": ["first", {"x": 1, "y": 2}]}));
}

#[test]
fn test_idempotence() {
    let mut once = root(r#"{"a": {"b": {"d": 5}}}"#);
    once.set_path("a.b.c[2]", 10).unwrap();

    let mut twice = root(r#"{"a": {"b": {"d": 5}}}"#);
    twice.set_path("a.b.c[2]", 10).unwrap();
    twice.set_path("a.b.c[2]", 10).unwrap();

    assert_eq!(
        serde_json::to_value(&once).unwrap(),
        serde_json::to_value(&twice).unwrap()
    );
}

#[test]
fn test_setting_null_overwrites() {
    // An explicit null is a real leaf, not a hole.
    let mut map = root(r#"{"a": {"b": 5}}"#);
    map.set_path("a.b", Value::Null).unwrap();
    assert_root(&map, json!({"a": {"b": null}}));
}

// ===== WHITESPACE AND EMPTY KEYS =====

#[test]
fn test_whitespace_keys_are_not_trimmed() {
    let mut map = Map::new();
    map.set_path(" ", 0).unwrap();
    assert_root(&map, json!({" ": 0}));

    // " 0 " is not a valid integer literal, so it is a map key.
    let mut map = Map::new();
    map.set_path("a. 0 ", 5).unwrap();
    assert_root(&map, json!({"a": {" 0 ": 5}}));

    let mut map = Map::new();
    map.set_path(" 0. 1. 2. 3", 5).unwrap();
    assert_root(&map, json!({" 0": {" 1": {" 2": {" 3": 5}}}}));
}

#[test]
fn test_empty_trailing_segment_is_a_key() {
    let mut map = Map::new();
    map.set_path("a.b.", 1).unwrap();
    assert_root(&map, json!({"a": {"b": {"": 1}}}));
}
