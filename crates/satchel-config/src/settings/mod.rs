//! satchel.toml settings parsing and serialization

use crate::ConfigResult;
use satchel_core::SatchelError;
use serde::{Deserialize, Serialize};

/// Complete satchel.toml configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Random string generation
    #[serde(default)]
    pub random: RandomSection,

    /// Case conversion
    #[serde(default)]
    pub case: CaseSection,

    /// Date/time defaults
    #[serde(default)]
    pub time: TimeSection,
}

/// `[random]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomSection {
    /// Default length of generated strings
    #[serde(default = "default_length")]
    pub length: usize,

    /// Character set used by `random --charset` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

/// `[case]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSection {
    /// Delimiter inserted by snake conversion
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

/// `[time]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeSection {
    /// IANA timezone used when a command is given none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// One settings file as written: only the keys it sets are `Some`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(default)]
    pub random: RandomLayer,
    #[serde(default)]
    pub case: CaseLayer,
    #[serde(default)]
    pub time: TimeLayer,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomLayer {
    pub length: Option<usize>,
    pub charset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseLayer {
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeLayer {
    pub timezone: Option<String>,
}

impl SettingsLayer {
    /// Overwrite the keys this layer sets
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(length) = self.random.length {
            settings.random.length = length;
        }
        if let Some(charset) = &self.random.charset {
            settings.random.charset = Some(charset.clone());
        }
        if let Some(delimiter) = &self.case.delimiter {
            settings.case.delimiter = delimiter.clone();
        }
        if let Some(timezone) = &self.time.timezone {
            settings.time.timezone = Some(timezone.clone());
        }
    }
}

impl From<Settings> for SettingsLayer {
    fn from(settings: Settings) -> Self {
        Self {
            random: RandomLayer {
                length: Some(settings.random.length),
                charset: settings.random.charset,
            },
            case: CaseLayer {
                delimiter: Some(settings.case.delimiter),
            },
            time: TimeLayer {
                timezone: settings.time.timezone,
            },
        }
    }
}

fn default_length() -> usize {
    16
}

fn default_delimiter() -> String {
    "_".to_string()
}

impl Default for RandomSection {
    fn default() -> Self {
        Self {
            length: default_length(),
            charset: None,
        }
    }
}

impl Default for CaseSection {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Parse TOML string to Settings
pub fn parse_settings(content: &str) -> ConfigResult<Settings> {
    check_syntax(content)?;

    // Then parse with serde for type safety
    let settings: Settings = toml::from_str(content).map_err(|e| SatchelError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Parse TOML string to a layer holding only the keys it sets
pub fn parse_layer(content: &str) -> ConfigResult<SettingsLayer> {
    check_syntax(content)?;

    let layer: SettingsLayer = toml::from_str(content).map_err(|e| SatchelError::TomlParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    let mut resolved = Settings::default();
    layer.apply_to(&mut resolved);
    validate_settings(&resolved)?;

    Ok(layer)
}

// Syntax check only; errors carry toml_edit's line and column
fn check_syntax(content: &str) -> ConfigResult<()> {
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| SatchelError::TomlParse {
            message: format!("TOML syntax error: {}", e),
        })?;
    Ok(())
}

/// Serialize Settings to TOML string
pub fn serialize_settings(settings: &Settings) -> ConfigResult<String> {
    toml::to_string_pretty(settings).map_err(|e| SatchelError::TomlParse {
        message: format!("TOML serialization error: {}", e),
    })
}

/// Validate setting values
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    if settings.random.length == 0 {
        return Err(SatchelError::ConfigValidation {
            field: "random.length".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    if let Some(charset) = &settings.random.charset {
        if charset.is_empty() {
            return Err(SatchelError::ConfigValidation {
                field: "random.charset".to_string(),
                reason: "must contain at least one character".to_string(),
            });
        }
    }

    if settings.case.delimiter.is_empty() {
        return Err(SatchelError::ConfigValidation {
            field: "case.delimiter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if let Some(timezone) = &settings.time.timezone {
        satchel_time::parse_timezone(timezone).map_err(|_| SatchelError::ConfigValidation {
            field: "time.timezone".to_string(),
            reason: format!("unknown timezone '{}'", timezone),
        })?;
    }

    Ok(())
}

/// Load and parse satchel.toml from file path
pub async fn load_from_file(path: &camino::Utf8Path) -> ConfigResult<Settings> {
    let content = read_settings_file(path).await?;
    parse_settings(&content).map_err(|e| in_file(path, e))
}

/// Load a settings file as a layer of explicitly set keys
pub async fn load_layer_from_file(path: &camino::Utf8Path) -> ConfigResult<SettingsLayer> {
    let content = read_settings_file(path).await?;
    parse_layer(&content).map_err(|e| in_file(path, e))
}

async fn read_settings_file(path: &camino::Utf8Path) -> ConfigResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SatchelError::io(format!("Failed to read {}", path), e))
}

fn in_file(path: &camino::Utf8Path, error: SatchelError) -> SatchelError {
    match error {
        SatchelError::TomlParse { message } => SatchelError::TomlParse {
            message: format!("In file {}: {}", path, message),
        },
        SatchelError::ConfigValidation { field, reason } => SatchelError::ConfigValidation {
            field,
            reason: format!("{} (in {})", reason, path),
        },
        other => other,
    }
}
