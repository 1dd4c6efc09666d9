//! Terminal color support for diagnostics.
//!
//! Colors are used only when stderr is a terminal and `NO_COLOR` is unset.

use std::env;
use std::io::{self, IsTerminal};

const RED: &str = "31";
const DIM: &str = "2";

/// Color support detection and formatting
#[derive(Debug, Clone, Copy)]
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        let enabled = env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();
        Self { enabled }
    }

    #[cfg(test)]
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_plain() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.red("x"), "x");
        assert_eq!(colors.dim("x"), "x");
    }

    #[test]
    fn test_enabled_wraps_in_escapes() {
        let colors = ColorSupport::enabled();
        assert_eq!(colors.red("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(colors.dim("x"), "\x1b[2mx\x1b[0m");
    }
}
