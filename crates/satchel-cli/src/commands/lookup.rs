//! `satchel get` and `satchel exists` command implementations.
//!
//! Both load the document fully, then walk it with dot-notation paths.

use camino::Utf8Path;
use satchel_arr::{exists as path_exists, get as path_get};
use satchel_config::load_from_file;
use satchel_core::{SatchelResult, Value};
use tracing::debug;

/// Execute `satchel get`
pub async fn get(file: &Utf8Path, path: Option<&str>, default: Option<&str>) -> SatchelResult<String> {
    let document = load_from_file(file).await?;
    let default = default.map(parse_default).unwrap_or_default();

    let found = path_get(&document, path, default);
    debug!("Resolved {:?} to a {}", path, found.type_name());
    Ok(render(&found))
}

/// Execute `satchel exists`
pub async fn exists(file: &Utf8Path, path: &str) -> SatchelResult<String> {
    let document = load_from_file(file).await?;
    Ok(path_exists(&document, path).to_string())
}

/// Interpret a `--default` argument as JSON, falling back to plain text
fn parse_default(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}

/// Strings print bare; everything else prints as JSON
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
