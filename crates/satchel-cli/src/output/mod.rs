//! Terminal output formatting and utilities.
//!
//! Command results go to stdout undecorated so they can be piped;
//! diagnostics go to stderr and are colored when the terminal allows it.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print a command result
    pub fn value(&self, value: &str) {
        println!("{}", value);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        eprintln!("{}", self.colors.dim(message));
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
