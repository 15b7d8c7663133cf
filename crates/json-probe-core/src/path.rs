//! Key-path traversal over JSON documents.
//!
//! A [`KeyPath`] is a dotted sequence of object keys and array indices
//! (`user.addresses.0.city`). [`access_nested`] walks a path through a
//! [`serde_json::Value`] and returns a reference to the target node, with
//! typed errors that name the failing segment and the position reached.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, PathError, Result};

/// One step of a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member lookup
    Key(String),
    /// Array element lookup
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A parsed key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Create a path from pre-built segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The segments of this path, in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    /// Parse dotted notation. Segments made solely of ASCII digits become
    /// array indices, everything else is an object key.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(PathError::EmptyPath.into());
        }

        let mut segments = Vec::new();
        for raw in s.split('.') {
            if raw.is_empty() {
                return Err(PathError::EmptyPath.into());
            }
            match raw.parse::<usize>() {
                Ok(index) => segments.push(Segment::Index(index)),
                Err(_) => segments.push(Segment::Key(raw.to_string())),
            }
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Walk `path` through `value` and return the referenced node.
pub fn access_nested<'a>(value: &'a Value, path: &KeyPath) -> Result<&'a Value> {
    if path.is_empty() {
        return Err(PathError::EmptyPath.into());
    }

    let mut current = value;
    let mut at = String::from("$");
    for segment in path.segments() {
        current = descend(current, segment, &at)?;
        let _ = write!(at, ".{}", segment);
    }

    Ok(current)
}

fn descend<'a>(
    value: &'a Value,
    segment: &Segment,
    at: &str,
) -> std::result::Result<&'a Value, PathError> {
    match (value, segment) {
        (Value::Object(map), Segment::Key(key)) => {
            map.get(key).ok_or_else(|| PathError::KeyNotFound {
                key: key.clone(),
                at: at.to_string(),
            })
        }
        (Value::Object(map), Segment::Index(index)) => {
            // Numeric segments still work as object keys: {"0": ...}
            let key = index.to_string();
            map.get(&key).ok_or(PathError::KeyNotFound {
                key,
                at: at.to_string(),
            })
        }
        (Value::Array(items), Segment::Index(index)) => {
            items.get(*index).ok_or(PathError::IndexOutOfBounds {
                index: *index,
                len: items.len(),
                at: at.to_string(),
            })
        }
        (Value::Array(_), Segment::Key(key)) => Err(PathError::KeyOnArray {
            key: key.clone(),
            at: at.to_string(),
        }),
        (other, segment) => Err(PathError::NotAContainer {
            segment: segment.to_string(),
            found: json_type_name(other),
            at: at.to_string(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
