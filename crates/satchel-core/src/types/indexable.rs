//! The keyed-lookup capability.
//!
//! Anything that can answer "is this key present?" and "what is stored
//! under this key?" can be traversed with dot notation. Presence and
//! retrieval are separate calls: implementations are free to make either
//! one lazy or expensive, and callers never iterate the whole structure.

use crate::types::value::{list_index, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Keyed existence check and keyed retrieval
pub trait Indexable: fmt::Debug + Send + Sync {
    /// Check whether `key` is present. A stored null still counts.
    fn has_key(&self, key: &str) -> bool;

    /// Fetch the value stored under `key`
    fn get_key(&self, key: &str) -> Option<Value>;
}

impl Indexable for Value {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        self.child(key).map(Cow::into_owned)
    }
}

impl Indexable for IndexMap<String, Value> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Indexable for HashMap<String, Value> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Indexable for BTreeMap<String, Value> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Indexable for Vec<Value> {
    fn has_key(&self, key: &str) -> bool {
        list_index(key).is_some_and(|index| index < self.len())
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        list_index(key).and_then(|index| self.get(index)).cloned()
    }
}

impl<T: Indexable + ?Sized> Indexable for Arc<T> {
    fn has_key(&self, key: &str) -> bool {
        (**self).has_key(key)
    }

    fn get_key(&self, key: &str) -> Option<Value> {
        (**self).get_key(key)
    }
}
