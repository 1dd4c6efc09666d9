//! Dot-notation access for nested containers
//!
//! This crate resolves paths such as `"server.ports.0"` against a `Value`
//! tree or any `Indexable` type. Missing keys are an expected outcome:
//! `get` falls back to a caller-supplied default and `exists` answers
//! `false`, neither ever fails.
//!
//! Every `.` separates two segments; keys that themselves contain a dot
//! cannot be addressed through a multi-segment path.

pub mod accessor;
pub mod json;

// Re-export main operations
pub use accessor::{accessible, exists, exists_in, get, get_in, get_or_null};
pub use json::JsonDocument;
