//! Loaded JSON documents and their derived statistics.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::memo::Memo;
use crate::path::{access_nested, KeyPath};

/// A parsed JSON document with lazily-computed derived properties.
///
/// Structural statistics are computed on the first call to
/// [`stats`](Self::stats) and cached for the lifetime of the document.
#[derive(Debug)]
pub struct Document {
    root: Value,
    stats: Memo<DocumentStats>,
}

impl Document {
    /// Wrap an already-parsed value.
    pub fn new(root: Value) -> Self {
        Self {
            root,
            stats: Memo::new(),
        }
    }

    /// Parse a document from raw bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(Self::new(serde_json::from_slice(data)?))
    }

    /// The root value of the document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a key path against the document.
    pub fn get(&self, path: &KeyPath) -> Result<&Value> {
        access_nested(&self.root, path)
    }

    /// Structural statistics for the document.
    ///
    /// The tree is walked once, on the first call; later calls return the
    /// cached result.
    pub fn stats(&self) -> &DocumentStats {
        self.stats.get_or_compute(|| {
            debug!("Computing document statistics");
            DocumentStats::collect(&self.root)
        })
    }
}

/// Node counts and nesting depth of a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of object nodes
    pub objects: usize,
    /// Number of array nodes
    pub arrays: usize,
    /// Number of string values
    pub strings: usize,
    /// Number of numeric values
    pub numbers: usize,
    /// Number of boolean values
    pub booleans: usize,
    /// Number of null values
    pub nulls: usize,
    /// Total number of nodes, containers included
    pub total_nodes: usize,
    /// Deepest nesting level; a scalar root has depth 1
    pub max_depth: usize,
}

impl DocumentStats {
    fn collect(root: &Value) -> Self {
        let mut stats = Self::default();
        walk(root, 1, &mut stats);
        stats
    }
}

fn walk(value: &Value, depth: usize, stats: &mut DocumentStats) {
    stats.total_nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    match value {
        Value::Null => stats.nulls += 1,
        Value::Bool(_) => stats.booleans += 1,
        Value::Number(_) => stats.numbers += 1,
        Value::String(_) => stats.strings += 1,
        Value::Array(items) => {
            stats.arrays += 1;
            for item in items {
                walk(item, depth + 1, stats);
            }
        }
        Value::Object(map) => {
            stats.objects += 1;
            for item in map.values() {
                walk(item, depth + 1, stats);
            }
        }
    }
}
