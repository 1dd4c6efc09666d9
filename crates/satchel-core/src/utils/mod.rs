//! Utility functions and helpers.
//!
//! Small functional helpers used across satchel crates.

pub mod basename;
pub mod tap;

// Re-export commonly used utilities
pub use basename::{basename_of_val, class_basename, type_basename};
pub use tap::{tap, tapped, Tap, TapProxy};
