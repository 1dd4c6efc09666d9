//! Error message formatting with actionable suggestions.

use super::colors::ColorSupport;
use satchel_core::SatchelError;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self::with_colors(ColorSupport::detect())
    }

    pub fn with_colors(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with its suggestion and source chain
    pub fn format_error(&self, error: &SatchelError) -> String {
        let mut output = format!("{}: {}\n", self.colors.red("error"), error);

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&format!("{}: {}\n", self.colors.dim("help"), suggestion));
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&format!("{}: {}\n", self.colors.dim("caused by"), err));
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_error() {
        let formatter = ErrorFormatter::with_colors(ColorSupport::disabled());
        let rendered = formatter.format_error(&SatchelError::EmptyCharset);
        assert!(rendered.starts_with("error: Character set"));
        assert!(rendered.contains("help: "));
    }

    #[test]
    fn test_format_source_chain() {
        let formatter = ErrorFormatter::with_colors(ColorSupport::disabled());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let rendered = formatter.format_error(&SatchelError::io("Failed to read a.json".to_string(), io));
        assert!(rendered.contains("error: IO error: Failed to read a.json"));
        assert!(rendered.contains("caused by: no such file"));
    }

    #[test]
    fn test_colored_output() {
        let formatter = ErrorFormatter::with_colors(ColorSupport::enabled());
        let rendered = formatter.format_error(&SatchelError::OpaqueValue);
        assert!(rendered.starts_with("\x1b[31merror\x1b[0m"));
    }
}
