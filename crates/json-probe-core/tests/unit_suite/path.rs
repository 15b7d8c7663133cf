//! Key-path traversal tests.

use json_probe_core::{access_nested, Error, KeyPath, PathError};
use serde_json::{json, Value};

use super::helpers::{mixed_document, nested_document};

fn parse(raw: &str) -> KeyPath {
    raw.parse().expect("key path should parse")
}

fn path_error(result: Result<&Value, Error>) -> PathError {
    match result {
        Err(Error::Path(e)) => e,
        other => panic!("expected path error, got {:?}", other.map(|v| v.clone())),
    }
}

// ============================================================================
// Successful Traversal
// ============================================================================

#[test]
fn access_resolves_keys_at_every_depth() {
    let cases = [
        (json!({"a": 1}), "a", json!(1)),
        (json!({"a": {"b": 2}}), "a.b", json!(2)),
        (json!({"a": {"b": {"c": 3}}}), "a.b.c", json!(3)),
    ];

    for (document, raw_path, expected) in cases {
        let value = access_nested(&document, &parse(raw_path)).unwrap();
        assert_eq!(value, &expected, "path {}", raw_path);
    }
}

#[test]
fn access_resolves_intermediate_containers() {
    let document = nested_document();
    let value = access_nested(&document, &parse("a.b")).unwrap();
    assert_eq!(value, &json!({"c": 3}));
}

#[test]
fn access_resolves_array_indices() {
    let document = mixed_document();
    let value = access_nested(&document, &parse("endpoints.1.host")).unwrap();
    assert_eq!(value, &json!("beta.internal"));
}

#[test]
fn access_resolves_numeric_object_keys() {
    let document = json!({"0": {"name": "first"}});
    let value = access_nested(&document, &parse("0.name")).unwrap();
    assert_eq!(value, &json!("first"));
}

// ============================================================================
// Traversal Errors
// ============================================================================

#[test]
fn access_missing_key_reports_key_and_position() {
    let cases = [
        (json!({}), "a", "a"),
        (json!({"a": {"b": 2}}), "a.b.c", "c"),
    ];

    for (document, raw_path, missing) in cases {
        match path_error(access_nested(&document, &parse(raw_path))) {
            PathError::KeyNotFound { key, .. } => assert_eq!(key, missing),
            other => panic!("expected KeyNotFound, got {:?}", other),
        }
    }
}

#[test]
fn access_into_scalar_reports_type() {
    let document = json!({"a": 1});
    match path_error(access_nested(&document, &parse("a.b"))) {
        PathError::NotAContainer { segment, found, at } => {
            assert_eq!(segment, "b");
            assert_eq!(found, "number");
            assert_eq!(at, "$.a");
        }
        other => panic!("expected NotAContainer, got {:?}", other),
    }
}

#[test]
fn access_index_out_of_bounds() {
    let document = json!({"items": [10, 20]});
    match path_error(access_nested(&document, &parse("items.5"))) {
        PathError::IndexOutOfBounds { index, len, .. } => {
            assert_eq!(index, 5);
            assert_eq!(len, 2);
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn access_key_on_array_rejected() {
    let document = json!([1, 2, 3]);
    match path_error(access_nested(&document, &parse("first"))) {
        PathError::KeyOnArray { key, .. } => assert_eq!(key, "first"),
        other => panic!("expected KeyOnArray, got {:?}", other),
    }
}

#[test]
fn access_empty_path_rejected() {
    let document = json!({"a": 1});
    let empty = KeyPath::new(vec![]);
    match path_error(access_nested(&document, &empty)) {
        PathError::EmptyPath => {}
        other => panic!("expected EmptyPath, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_failure() {
    let document = json!({"a": {"b": 2}});
    let err = access_nested(&document, &parse("a.x")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'x'"), "message was: {}", message);
    assert!(message.contains("$.a"), "message was: {}", message);
}
