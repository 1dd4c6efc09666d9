//! Configuration and document loading for satchel
//!
//! This crate handles parsing and validation of satchel.toml settings and
//! loads JSON/TOML documents into the `Value` tree that path lookups walk.

pub mod document;
pub mod merge;
pub mod settings;

// Re-export main types
pub use document::{load_from_file, parse_json, parse_toml, DocumentFormat};
pub use merge::{SettingsLayering, SettingsLoader, SettingsSource};
pub use settings::{CaseSection, RandomSection, Settings, SettingsLayer, TimeSection};

use satchel_core::SatchelError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, SatchelError>;
