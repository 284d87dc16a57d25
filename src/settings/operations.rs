//! Loading settings from YAML files and command-line overrides.

use super::types::{PackageSettings, SettingValue};
use crate::error::{LauncherError, Result};
use std::path::Path;

impl PackageSettings {
    /// Load settings from a YAML file containing a flat name/value mapping.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LauncherError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            LauncherError::UserError(msg) => {
                LauncherError::UserError(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse settings from a YAML string. An empty document yields no settings.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| LauncherError::UserError(format!("failed to parse settings YAML: {}", e)))
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LauncherError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Apply `NAME=VALUE` overrides, as given by repeated `--set` arguments.
    pub fn apply_overrides<S: AsRef<str>>(&mut self, overrides: &[S]) -> Result<()> {
        for raw in overrides {
            let raw = raw.as_ref();
            let (name, value) = raw.split_once('=').ok_or_else(|| {
                LauncherError::UserError(format!(
                    "invalid setting override '{}'\n\
                     Fix: use NAME=VALUE, e.g. --set InternalTraceLevel=Debug",
                    raw
                ))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(LauncherError::UserError(format!(
                    "invalid setting override '{}': setting name cannot be empty",
                    raw
                )));
            }
            self.set(name, SettingValue::parse_cli(value));
        }
        Ok(())
    }
}
