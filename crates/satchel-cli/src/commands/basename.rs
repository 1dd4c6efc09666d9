//! `satchel basename` command implementation.

use satchel_core::class_basename;

/// Execute `satchel basename`
pub fn execute(name: &str) -> String {
    class_basename(name)
}
