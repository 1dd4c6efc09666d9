//! JSON and TOML documents loaded into the `Value` tree

use crate::ConfigResult;
use camino::Utf8Path;
use indexmap::IndexMap;
use satchel_core::{SatchelError, Value};
use tracing::debug;

/// Supported document formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(SatchelError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }

    pub fn parse(self, content: &str) -> ConfigResult<Value> {
        match self {
            DocumentFormat::Json => parse_json(content),
            DocumentFormat::Toml => parse_toml(content),
        }
    }
}

/// Parse JSON text into a `Value`
pub fn parse_json(content: &str) -> ConfigResult<Value> {
    let json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SatchelError::JsonParse {
            message: format!("JSON parsing error: {}", e),
        })?;
    Ok(Value::from(json))
}

/// Parse TOML text into a `Value`
pub fn parse_toml(content: &str) -> ConfigResult<Value> {
    let table: toml::Table = toml::from_str(content).map_err(|e| SatchelError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;
    Ok(from_toml(toml::Value::Table(table)))
}

/// Convert a TOML value; datetimes become their RFC 3339 text
pub fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Int(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::List(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Map(
            table
                .into_iter()
                .map(|(k, v)| (k, from_toml(v)))
                .collect::<IndexMap<_, _>>(),
        ),
    }
}

/// Load a `.json` or `.toml` document from disk
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<Value> {
    let format = DocumentFormat::from_path(path)?;
    debug!("Loading {:?} document from {}", format, path);

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SatchelError::io(format!("Failed to read {}", path), e))?;

    format.parse(&content).map_err(|e| match e {
        SatchelError::JsonParse { message } => SatchelError::JsonParse {
            message: format!("In file {}: {}", path, message),
        },
        SatchelError::TomlParse { message } => SatchelError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        other => other,
    })
}
