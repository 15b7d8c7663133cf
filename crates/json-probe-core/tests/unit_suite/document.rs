//! Document behavior tests.

use json_probe_core::{Document, DocumentStats};
use serde_json::json;

use super::helpers::mixed_document;

#[test]
fn document_stats_for_mixed_tree() {
    let document = Document::new(mixed_document());

    let stats = document.stats();
    assert_eq!(stats.objects, 3); // root + two endpoint objects
    assert_eq!(stats.arrays, 1);
    assert_eq!(stats.strings, 3); // service + two hosts
    assert_eq!(stats.numbers, 3); // replicas + two ports
    assert_eq!(stats.nulls, 1);
    assert_eq!(stats.booleans, 0);
    assert_eq!(stats.total_nodes, 11);
    assert_eq!(stats.max_depth, 4); // root -> endpoints -> element -> host
}

#[test]
fn document_stats_identical_across_reads() {
    let document = Document::new(json!({"a": [1, 2, {"b": true}]}));

    let first = document.stats().clone();
    let second = document.stats().clone();
    assert_eq!(first, second);

    // Repeated reads return the same cached allocation
    assert!(std::ptr::eq(document.stats(), document.stats()));
}

#[test]
fn documents_keep_independent_stats() {
    let small = Document::new(json!(1));
    let large = Document::new(json!({"a": {"b": {"c": [1, 2, 3]}}}));

    let small_stats = small.stats();
    assert_eq!(small_stats.total_nodes, 1);

    // Computing one document's stats must not affect the other
    let large_stats = large.stats();
    assert_eq!(large_stats.total_nodes, 7);
    assert_eq!(large_stats.max_depth, 5);
    assert_eq!(small.stats().total_nodes, 1);
}

#[test]
fn document_stats_serialize_to_json() {
    let stats = DocumentStats {
        objects: 1,
        total_nodes: 1,
        max_depth: 1,
        ..Default::default()
    };

    let rendered = serde_json::to_value(&stats).unwrap();
    assert_eq!(rendered["objects"], json!(1));
    assert_eq!(rendered["nulls"], json!(0));
}

#[test]
fn document_get_and_stats_compose() {
    let document = Document::new(mixed_document());

    let port = document.get(&"endpoints.0.port".parse().unwrap()).unwrap();
    assert_eq!(port, &json!(8080));

    // Traversal must not disturb the memoized statistics
    assert_eq!(document.stats().arrays, 1);
}
