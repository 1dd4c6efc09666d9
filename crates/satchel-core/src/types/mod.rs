//! Core data types for satchel.
//!
//! This module provides the value model that path lookups operate on:
//! - `Value`, a dynamic tree of scalars, lists, maps and opaque objects
//! - `Indexable`, the keyed-lookup capability
//! - `Key`, a string or integer lookup key

pub mod indexable;
pub mod key;
pub mod value;

// Re-export all public types
pub use indexable::Indexable;
pub use key::{Key, KeyArg};
pub use value::{list_index, Value};
