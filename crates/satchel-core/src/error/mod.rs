//! Error types and result aliases for satchel operations.
//!
//! A missing key is never an error: lookups report absence through defaults
//! and booleans. The variants below cover the few operations that can
//! genuinely fail (randomness, time zones, parsing, I/O).

use thiserror::Error;

/// Unified error type for all satchel operations
#[derive(Error, Debug)]
pub enum SatchelError {
    // Randomness errors
    #[error("Secure random source is unavailable")]
    RandomUnavailable,

    #[error("Character set for random generation is empty")]
    EmptyCharset,

    // Date/time errors
    #[error("Unknown timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Timestamp {timestamp} is out of range")]
    InvalidTimestamp { timestamp: i64 },

    #[error("Invalid or nonexistent local date/time: {input}")]
    InvalidDateTime { input: String },

    // Value errors
    #[error("Opaque indexable objects cannot be materialized")]
    OpaqueValue,

    // Document and config errors
    #[error("Failed to parse JSON: {message}")]
    JsonParse { message: String },

    #[error("Failed to parse TOML: {message}")]
    TomlParse { message: String },

    #[error("Unsupported document format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // CLI errors
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for satchel operations
pub type SatchelResult<T> = Result<T, SatchelError>;

impl SatchelError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SatchelError::Io { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SatchelError::RandomUnavailable => {
                Some("The platform entropy source failed; check the host's random device")
            },
            SatchelError::EmptyCharset => Some("Pass at least one character in --charset"),
            SatchelError::InvalidTimezone { .. } => {
                Some("Use an IANA timezone name such as 'UTC' or 'America/New_York'")
            },
            SatchelError::UnsupportedFormat { .. } => {
                Some("Only .json and .toml documents can be queried")
            },
            SatchelError::OpaqueValue => {
                Some("Query a nested key instead of printing the whole object")
            },
            SatchelError::UnknownCommand { .. } => {
                Some("Run 'satchel help' to see available commands")
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SatchelError::InvalidTimezone {
            name: "Mars/Olympus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus");

        let err = SatchelError::ConfigValidation {
            field: "random.length".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration field 'random.length' is invalid: must be greater than zero"
        );
    }

    #[test]
    fn test_recoverable_and_suggestions() {
        let io = SatchelError::io(
            "read failed".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(io.is_recoverable());
        assert!(io.suggestion().is_none());

        assert!(!SatchelError::RandomUnavailable.is_recoverable());
        assert!(SatchelError::EmptyCharset.suggestion().is_some());

        let unknown = SatchelError::UnknownCommand {
            name: "gett".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown command 'gett'");
        assert!(unknown.suggestion().is_some_and(|help| help.contains("satchel help")));
    }
}
