//! # satchel-core
//!
//! Core types and helpers shared across all satchel crates.
//!
//! This crate provides:
//! - `Value`, the dynamic tree that dot-notation lookups walk
//! - `Indexable`, the keyed-lookup capability implemented by native
//!   containers and by external types
//! - `Key`/`KeyArg` for string or integer lookup keys
//! - `SatchelError` for unified error handling
//! - Functional helpers (`tap`, class basename)
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Value model and the indexable capability
//! - `error`: Error types and result aliases
//! - `utils`: Stateless helper functions

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{SatchelError, SatchelResult};
pub use types::{list_index, Indexable, Key, KeyArg, Value};
pub use utils::{class_basename, tap, Tap, TapProxy};
