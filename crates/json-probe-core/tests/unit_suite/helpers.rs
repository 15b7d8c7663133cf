//! Test helper utilities.
//!
//! Provides sample documents used across unit tests.

use serde_json::{json, Value};

/// A three-level nested document matching the classic traversal cases.
pub fn nested_document() -> Value {
    json!({"a": {"b": {"c": 3}}})
}

/// A document mixing objects, arrays and scalars.
pub fn mixed_document() -> Value {
    json!({
        "service": "json-probe",
        "replicas": 3,
        "endpoints": [
            {"host": "alpha.internal", "port": 8080},
            {"host": "beta.internal", "port": 8081}
        ],
        "maintainer": null
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_document_shape() {
        let doc = nested_document();
        assert!(doc["a"]["b"]["c"].is_number());
    }

    #[test]
    fn test_mixed_document_shape() {
        let doc = mixed_document();
        assert_eq!(doc["endpoints"].as_array().map(Vec::len), Some(2));
        assert!(doc["maintainer"].is_null());
    }
}
