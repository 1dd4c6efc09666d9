//! Path resolution over nested containers.
//!
//! A path is split on `.` into segments and walked one container at a time.
//! Presence is decided by an explicit key check, never by the stored value,
//! so a stored null, `false`, `0` or `""` is found like any other value.
//! The walk stops at the first missing segment or non-indexable value.

use satchel_core::{Indexable, Key, KeyArg, Value};
use std::borrow::Cow;
use tracing::trace;

/// Check whether `value` supports keyed lookups
pub fn accessible(value: &Value) -> bool {
    value.is_indexable()
}

/// Check whether `key` (a single key or a dot path) resolves in `container`
pub fn exists<'k>(container: &Value, key: impl Into<Key<'k>>) -> bool {
    if !accessible(container) {
        return false;
    }

    let key: Key<'k> = key.into();
    let path = key.as_str();

    match path.rsplit_once('.') {
        None => container.contains_key(&path),
        Some((parent, last)) => {
            walk(container, parent).is_some_and(|parent| parent.contains_key(last))
        },
    }
}

/// Resolve `key` in `container`, falling back to `default`.
///
/// An absent key (`None`) selects the container itself.
pub fn get<'a, 'k>(container: &'a Value, key: impl Into<KeyArg<'k>>, default: Value) -> Cow<'a, Value> {
    let key: KeyArg<'k> = key.into();
    let Some(key) = key.into_inner() else {
        return Cow::Borrowed(container);
    };

    if !accessible(container) {
        return Cow::Owned(default);
    }

    let path = key.as_str();
    let found = if path.contains('.') {
        walk(container, &path)
    } else if container.contains_key(&path) {
        container.child(&path)
    } else {
        None
    };

    found.unwrap_or(Cow::Owned(default))
}

/// Resolve `key` in `container`, falling back to `Value::Null`
pub fn get_or_null<'a, 'k>(container: &'a Value, key: impl Into<KeyArg<'k>>) -> Cow<'a, Value> {
    get(container, key, Value::Null)
}

/// `exists` for a caller holding a concrete `Indexable` rather than a `Value`
pub fn exists_in<'k, I>(container: &I, key: impl Into<Key<'k>>) -> bool
where
    I: Indexable + ?Sized,
{
    let key: Key<'k> = key.into();
    let path = key.as_str();

    match path.split_once('.') {
        None => container.has_key(&path),
        Some((first, rest)) => {
            container.has_key(first)
                && container
                    .get_key(first)
                    .is_some_and(|child| exists(&child, rest))
        },
    }
}

/// `get` for a caller holding a concrete `Indexable` rather than a `Value`
pub fn get_in<'k, I>(container: &I, key: impl Into<Key<'k>>, default: Value) -> Value
where
    I: Indexable + ?Sized,
{
    let key: Key<'k> = key.into();
    let path = key.as_str();
    let (first, rest) = match path.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (&*path, None),
    };

    if !container.has_key(first) {
        return default;
    }

    match (container.get_key(first), rest) {
        (Some(child), None) => child,
        (Some(child), Some(rest)) => get(&child, rest, default).into_owned(),
        (None, _) => default,
    }
}

/// Walk every segment of `path`, returning the value at its end
fn walk<'a>(container: &'a Value, path: &str) -> Option<Cow<'a, Value>> {
    let mut current = Cow::Borrowed(container);

    for (depth, segment) in path.split('.').enumerate() {
        if !current.contains_key(segment) {
            trace!(segment, depth, kind = current.type_name(), "path segment not found");
            return None;
        }
        current = descend(current, segment)?;
    }

    Some(current)
}

fn descend<'a>(current: Cow<'a, Value>, segment: &str) -> Option<Cow<'a, Value>> {
    match current {
        Cow::Borrowed(value) => value.child(segment),
        Cow::Owned(value) => value
            .child(segment)
            .map(|child| Cow::Owned(child.into_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn nested() -> Value {
        [(
            "foo",
            [
                ("bar", Value::from("baz")),
                ("baz", [("qux", "quux")].into_iter().collect()),
            ]
            .into_iter()
            .collect::<Value>(),
        )]
        .into_iter()
        .collect()
    }

    fn falsy() -> Value {
        [
            ("null", Value::Null),
            ("false", Value::Bool(false)),
            ("zero", Value::Int(0)),
            ("empty", Value::from("")),
        ]
        .into_iter()
        .collect()
    }

    /// Computes its values on demand and records how it is queried
    #[derive(Debug, Default)]
    struct LazyRegistry {
        has_calls: AtomicUsize,
        get_calls: AtomicUsize,
    }

    impl Indexable for LazyRegistry {
        fn has_key(&self, key: &str) -> bool {
            self.has_calls.fetch_add(1, Ordering::SeqCst);
            matches!(key, "services" | "empty")
        }

        fn get_key(&self, key: &str) -> Option<Value> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            match key {
                "services" => Some(
                    [("db", Value::from(vec!["primary", "replica"]))]
                        .into_iter()
                        .collect(),
                ),
                "empty" => Some(Value::Null),
                _ => None,
            }
        }
    }

    #[test]
    fn test_accessible() {
        assert!(accessible(&Value::List(Vec::new())));
        assert!(accessible(&nested()));
        assert!(accessible(&Value::object(LazyRegistry::default())));
        assert!(!accessible(&Value::from("string")));
        assert!(!accessible(&Value::Null));
        assert!(!accessible(&Value::from(1)));
    }

    #[test]
    fn test_get_single_key() {
        let array: Value = [("foo", "bar")].into_iter().collect();
        assert_eq!(get(&array, "foo", Value::Null).into_owned(), Value::from("bar"));
        assert_eq!(get(&array, "qux", Value::from("baz")).into_owned(), Value::from("baz"));
    }

    #[test]
    fn test_get_dot_notation() {
        let array = nested();
        assert_eq!(get(&array, "foo.bar", Value::Null).into_owned(), Value::from("baz"));
        assert_eq!(
            get(&array, "foo.baz.qux", Value::Null).into_owned(),
            Value::from("quux")
        );
        assert_eq!(get(&array, "foo.qux", Value::from("qux")).into_owned(), Value::from("qux"));
        assert!(get_or_null(&array, "foo.qux").is_null());
    }

    #[test]
    fn test_get_borrows_native_values() {
        let array = nested();
        assert!(matches!(get(&array, "foo.bar", Value::Null), Cow::Borrowed(_)));
        assert!(matches!(get(&array, "missing", Value::Null), Cow::Owned(_)));
    }

    #[test]
    fn test_get_without_key_returns_container() {
        let array: Value = [("foo", "bar")].into_iter().collect();
        assert_eq!(*get(&array, None::<&str>, Value::Null), array);
        assert_eq!(*get(&array, KeyArg::WHOLE, Value::from("d")), array);

        let scalar = Value::from("not-a-container");
        assert_eq!(*get(&scalar, KeyArg::WHOLE, Value::Null), scalar);
    }

    #[test]
    fn test_non_indexable_container_short_circuits() {
        let scalar = Value::from("not-a-container");
        assert_eq!(
            get(&scalar, "a.b", Value::from("default")).into_owned(),
            Value::from("default")
        );
        assert_eq!(get(&scalar, "a", Value::from("default")).into_owned(), Value::from("default"));
        assert!(!exists(&scalar, "a.b"));
        assert!(!exists(&Value::Null, "a"));
    }

    #[test]
    fn test_empty_container() {
        let empty = Value::Map(Default::default());
        assert_eq!(get(&empty, "foo", Value::from("default")).into_owned(), Value::from("default"));
        assert!(!exists(&empty, "foo"));
        assert!(accessible(&empty));
    }

    #[test]
    fn test_exists() {
        let array = nested();
        assert!(exists(&array, "foo"));
        assert!(exists(&array, "foo.bar"));
        assert!(exists(&array, "foo.baz.qux"));
        assert!(!exists(&array, "foo.qux"));
        assert!(!exists(&array, "bar"));
        assert!(!exists(&array, "foo.bar.baz"));
    }

    #[test]
    fn test_falsy_values_are_present() {
        let array = falsy();
        for key in ["null", "false", "zero", "empty"] {
            assert!(exists(&array, key), "{key} should exist");
            assert_ne!(get(&array, key, Value::from("sentinel")).into_owned(), Value::from("sentinel"));
        }
        assert!(get(&array, "null", Value::from(1)).is_null());
        assert_eq!(get(&array, "false", Value::Null).into_owned(), Value::Bool(false));
        assert_eq!(get(&array, "zero", Value::from("qux")).into_owned(), Value::Int(0));
        assert_eq!(get(&array, "empty", Value::Null).into_owned(), Value::from(""));

        let wrapped: Value = [("inner", array)].into_iter().collect();
        assert!(exists(&wrapped, "inner.null"));
        assert!(get(&wrapped, "inner.null", Value::from(1)).is_null());
    }

    #[test]
    fn test_numeric_keys() {
        let array: Value = [("items", Value::from(vec!["first", "second", "third"]))]
            .into_iter()
            .collect();

        assert_eq!(get(&array, "items.0", Value::Null).into_owned(), Value::from("first"));
        assert_eq!(get(&array, "items.1", Value::Null).into_owned(), Value::from("second"));
        assert!(exists(&array, "items.2"));
        assert!(!exists(&array, "items.3"));
        assert!(!exists(&array, "items.01"));

        let list = Value::from(vec!["zero", "one"]);
        assert!(exists(&list, 1));
        assert_eq!(get(&list, 0usize, Value::Null).into_owned(), Value::from("zero"));
        assert!(!exists(&list, -1i64));
    }

    #[test]
    fn test_integer_keys_on_maps() {
        let array: Value = [("7", "seven")].into_iter().collect();
        assert!(exists(&array, 7));
        assert_eq!(get(&array, 7, Value::Null).into_owned(), Value::from("seven"));
    }

    #[test]
    fn test_keys_with_special_characters() {
        let array: Value = [
            ("key-with-dash", "value1"),
            ("key_with_underscore", "value2"),
            ("key.with.dot", "value3"),
        ]
        .into_iter()
        .collect();

        assert_eq!(get(&array, "key-with-dash", Value::Null).into_owned(), Value::from("value1"));
        assert_eq!(
            get(&array, "key_with_underscore", Value::Null).into_owned(),
            Value::from("value2")
        );
        // Every dot separates segments, so the dotted key is unreachable
        assert!(!exists(&array, "key.with.dot"));
    }

    #[test]
    fn test_empty_segments_are_literal_keys() {
        let array: Value = [("a", [("", 1)].into_iter().collect::<Value>())]
            .into_iter()
            .collect();
        assert!(exists(&array, "a."));
        assert_eq!(get(&array, "a.", Value::Null).into_owned(), Value::Int(1));
        assert!(!exists(&array, "a..b"));
    }

    #[test]
    fn test_deeply_nested() {
        let mut value = Value::from("deep");
        for level in ["value", "level4", "level3", "level2", "level1"] {
            value = [(level, value)].into_iter().collect();
        }

        assert_eq!(
            get(&value, "level1.level2.level3.level4.value", Value::Null).into_owned(),
            Value::from("deep")
        );
        assert!(exists(&value, "level1.level2.level3.level4.value"));
    }

    #[test]
    fn test_mixed_nested_structures() {
        let array: Value = [(
            "mixed",
            [
                ("array", Value::from(vec!["a", "b", "c"])),
                ("object", Value::object(LazyRegistry::default())),
                ("scalar", Value::from("value")),
            ]
            .into_iter()
            .collect::<Value>(),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            get(&array, "mixed.array", Value::Null).into_owned(),
            Value::from(vec!["a", "b", "c"])
        );
        assert_eq!(get(&array, "mixed.scalar", Value::Null).into_owned(), Value::from("value"));
        assert_eq!(
            get(&array, "mixed.object.services.db.1", Value::Null).into_owned(),
            Value::from("replica")
        );
        assert!(exists(&array, "mixed.object.empty"));
        assert!(!exists(&array, "mixed.object.missing"));
    }

    #[test]
    fn test_custom_indexable_checks_before_fetching() {
        let registry = LazyRegistry::default();

        assert!(!exists_in(&registry, "missing.key"));
        assert_eq!(registry.get_calls.load(Ordering::SeqCst), 0);

        assert_eq!(
            get_in(&registry, "missing", Value::from("default")),
            Value::from("default")
        );
        assert_eq!(registry.get_calls.load(Ordering::SeqCst), 0);

        assert_eq!(get_in(&registry, "services.db.0", Value::Null), Value::from("primary"));
        assert_eq!(get_in(&registry, "empty", Value::from(1)), Value::Null);
        assert!(exists_in(&registry, "services.db"));
        assert!(exists_in(&registry, "empty"));
        assert!(registry.has_calls.load(Ordering::SeqCst) >= 5);
    }

    #[test]
    fn test_exists_does_not_fetch_final_segment() {
        let registry = std::sync::Arc::new(LazyRegistry::default());
        let value = Value::Object(registry.clone());

        assert!(exists(&value, "services"));
        assert_eq!(registry.get_calls.load(Ordering::SeqCst), 0);
        assert_eq!(registry.has_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_spec_examples() {
        let value: Value = [("a", [("b", 1)].into_iter().collect::<Value>())]
            .into_iter()
            .collect();
        assert_eq!(get(&value, "a.b", Value::Null).into_owned(), Value::Int(1));
        assert!(exists(&value, "a.b"));
        assert!(!exists(&value, "a.c"));
    }
}
