//! Lazily converted JSON documents.
//!
//! `JsonDocument` exposes a parsed `serde_json::Value` through the
//! `Indexable` capability. Nothing is converted up front: each lookup
//! converts only the requested child, and nested objects and arrays are
//! handed out as further `JsonDocument`s that share the same parsed tree.

use satchel_core::{list_index, Indexable, SatchelError, SatchelResult, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A view into a shared JSON tree, addressed by JSON pointer
#[derive(Debug, Clone)]
pub struct JsonDocument {
    root: Arc<serde_json::Value>,
    pointer: String,
    lookups: Arc<AtomicUsize>,
}

impl JsonDocument {
    /// Wrap an already parsed JSON value
    pub fn new(root: serde_json::Value) -> Self {
        Self {
            root: Arc::new(root),
            pointer: String::new(),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Parse JSON text into a document
    pub fn parse(content: &str) -> SatchelResult<Self> {
        serde_json::from_str(content)
            .map(Self::new)
            .map_err(|e| SatchelError::JsonParse {
                message: format!("JSON parsing error: {}", e),
            })
    }

    /// JSON pointer of the node this view addresses ("" for the root)
    pub fn pointer(&self) -> &str {
        &self.pointer
    }

    /// Number of values fetched through this document and its children
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    fn node(&self) -> Option<&serde_json::Value> {
        self.root.pointer(&self.pointer)
    }

    fn child_view(&self, key: &str) -> Self {
        Self {
            root: Arc::clone(&self.root),
            pointer: format!("{}/{}", self.pointer, escape_pointer_token(key)),
            lookups: Arc::clone(&self.lookups),
        }
    }
}

impl Indexable for JsonDocument {
    fn has_key(&self, key: &str) -> bool {
        match self.node() {
            Some(serde_json::Value::Object(object)) => object.contains_key(key),
            Some(serde_json::Value::Array(items)) => {
                list_index(key).is_some_and(|index| index < items.len())
            },
            _ => false,
        }
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let child = match self.node()? {
            serde_json::Value::Object(object) => object.get(key)?,
            serde_json::Value::Array(items) => items.get(list_index(key)?)?,
            _ => return None,
        };

        Some(match child {
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                Value::object(self.child_view(key))
            },
            scalar => Value::from(scalar.clone()),
        })
    }
}

// RFC 6901: '~' and '/' must be escaped inside a reference token
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
