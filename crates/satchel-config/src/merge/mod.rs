//! Settings layering, fallback logic, and environment overrides

use crate::settings::{self, Settings, SettingsLayer};
use crate::ConfigResult;
use camino::Utf8PathBuf;
use satchel_core::SatchelError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Project settings file name
pub const SETTINGS_FILE: &str = "satchel.toml";

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "SATCHEL_";

/// Main settings loading interface
pub struct SettingsLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
}

/// Settings layering and merging
pub struct SettingsLayering;

/// Where the project settings came from
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    /// Global config file
    Global(Utf8PathBuf),
    /// Project satchel.toml file
    Project(Utf8PathBuf),
    /// Built-in defaults
    Defaults,
}

impl SettingsLoader {
    /// Create a new settings loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd }
    }

    /// Load project settings, falling back to the global file, then defaults
    pub async fn load_project_settings(&self) -> ConfigResult<(Settings, SettingsSource)> {
        let project_path = self.resolve_config_path(SETTINGS_FILE)?;
        if project_path.exists() {
            debug!("Using project settings from {}", project_path);
            let settings = settings::load_from_file(&project_path).await?;
            return Ok((settings, SettingsSource::Project(project_path)));
        }

        if let Some(global_path) = Self::global_config_path()? {
            if global_path.exists() {
                debug!("Using global settings from {}", global_path);
                let settings = settings::load_from_file(&global_path).await?;
                return Ok((settings, SettingsSource::Global(global_path)));
            }
        }

        debug!("No settings file found, using defaults");
        Ok((Settings::default(), SettingsSource::Defaults))
    }

    /// Resolve the effective settings: global file, project file, `SATCHEL_*`
    /// environment variables, then `cli_overrides`
    pub async fn load_layered(
        &self,
        cli_overrides: &HashMap<String, String>,
    ) -> ConfigResult<Settings> {
        let global = match Self::global_config_path()? {
            Some(path) if path.exists() => {
                debug!("Layering global settings from {}", path);
                Some(settings::load_layer_from_file(&path).await?)
            },
            _ => None,
        };

        let project_path = self.resolve_config_path(SETTINGS_FILE)?;
        let project = if project_path.exists() {
            debug!("Layering project settings from {}", project_path);
            Some(settings::load_layer_from_file(&project_path).await?)
        } else {
            None
        };

        let env_overrides = SettingsLayering::collect_env_overrides();
        SettingsLayering::merge(global, project, &env_overrides, cli_overrides)
    }

    /// Find configuration file in project (walks up directory tree)
    pub fn resolve_config_path(&self, filename: &str) -> ConfigResult<Utf8PathBuf> {
        let mut current = self.cwd.as_path();

        loop {
            let config_path = current.join(filename);
            if config_path.exists() {
                return Ok(config_path);
            }

            // Move up one directory
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                // Reached filesystem root
                break;
            }
        }

        // Return path in current directory even if it doesn't exist
        Ok(self.cwd.join(filename))
    }

    /// Location of the global settings file, ~/.satchel/config.toml
    fn global_config_path() -> ConfigResult<Option<Utf8PathBuf>> {
        let Some(home_dir) = dirs::home_dir() else {
            return Ok(None);
        };

        let home = Utf8PathBuf::try_from(home_dir).map_err(|e| SatchelError::ConfigValidation {
            field: "home_dir".to_string(),
            reason: format!("Invalid home directory path: {}", e),
        })?;

        Ok(Some(home.join(".satchel").join("config.toml")))
    }
}

impl SettingsLayering {
    /// Merge settings layers: defaults, then global, then project, then env,
    /// then CLI flags. File layers only override the keys they set.
    pub fn merge(
        global: Option<SettingsLayer>,
        project: Option<SettingsLayer>,
        env_overrides: &HashMap<String, String>,
        cli_overrides: &HashMap<String, String>,
    ) -> ConfigResult<Settings> {
        let mut merged = Settings::default();
        for layer in [global, project].iter().flatten() {
            layer.apply_to(&mut merged);
        }

        // Apply environment variable overrides
        for (key, value) in env_overrides {
            match key.strip_prefix(ENV_PREFIX) {
                Some(name) => Self::apply(&mut merged, &name.to_ascii_lowercase(), key, value)?,
                None => warn!("Ignoring override {} without the {} prefix", key, ENV_PREFIX),
            }
        }

        // Apply CLI flag overrides (highest priority)
        for (key, value) in cli_overrides {
            Self::apply(&mut merged, key, key, value)?;
        }

        settings::validate_settings(&merged)?;
        Ok(merged)
    }

    fn apply(settings: &mut Settings, name: &str, source: &str, value: &str) -> ConfigResult<()> {
        match name {
            "random_length" | "length" => {
                settings.random.length =
                    value.parse().map_err(|e| SatchelError::ConfigValidation {
                        field: source.to_string(),
                        reason: format!("Invalid length '{}': {}", value, e),
                    })?;
            },
            "random_charset" | "charset" => {
                settings.random.charset = Some(value.to_string());
            },
            "case_delimiter" | "delimiter" => {
                settings.case.delimiter = value.to_string();
            },
            "timezone" => {
                settings.time.timezone = Some(value.to_string());
            },
            _ => {
                warn!("Ignoring unknown settings override {}", source);
            },
        }

        Ok(())
    }

    /// Collect environment variable overrides
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn layer() -> impl Strategy<Value = SettingsLayer> {
        (
            prop::option::of(1usize..512),
            prop::option::of("[a-z0-9]{1,8}"),
            prop::option::of("[-_.]"),
        )
            .prop_map(|(length, charset, delimiter)| {
                let mut layer = SettingsLayer::default();
                layer.random.length = length;
                layer.random.charset = charset;
                layer.case.delimiter = delimiter;
                layer
            })
    }

    proptest! {
        /// Every key a project sets beats the global layer
        #[test]
        fn project_keys_beat_global(global in layer(), project in layer()) {
            let merged = SettingsLayering::merge(
                Some(global.clone()),
                Some(project.clone()),
                &HashMap::new(),
                &HashMap::new(),
            )
            .unwrap();

            let defaults = Settings::default();
            prop_assert_eq!(
                merged.random.length,
                project.random.length.or(global.random.length).unwrap_or(defaults.random.length)
            );
            prop_assert_eq!(merged.random.charset, project.random.charset.or(global.random.charset));
            prop_assert_eq!(
                merged.case.delimiter,
                project.case.delimiter.or(global.case.delimiter).unwrap_or(defaults.case.delimiter)
            );
        }

        /// A CLI length override wins over every file layer
        #[test]
        fn cli_length_wins(global in layer(), project in layer(), length in 1usize..512) {
            let cli = HashMap::from([("length".to_string(), length.to_string())]);
            let merged = SettingsLayering::merge(Some(global), Some(project), &HashMap::new(), &cli).unwrap();
            prop_assert_eq!(merged.random.length, length);
        }
    }
}
