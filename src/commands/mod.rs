//! Command implementations for agent-launcher.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod describe;
mod list;

use crate::cli::{Command, SettingsArgs};
use agent_launcher::error::Result;
use agent_launcher::settings::PackageSettings;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List(args) => list::cmd_list(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Describe(args) => describe::cmd_describe(args),
    }
}

/// Build the package settings from `--settings` and `--set` arguments.
fn load_settings(args: &SettingsArgs) -> Result<PackageSettings> {
    let mut settings = match &args.settings_file {
        Some(path) => {
            debug!(path = %path.display(), "loading package settings");
            PackageSettings::load(path)?
        }
        None => PackageSettings::new(),
    };
    settings.apply_overrides(&args.overrides)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_launcher::settings::{SettingValue, names};
    use tempfile::TempDir;

    #[test]
    fn test_load_settings_without_sources() {
        let settings = load_settings(&SettingsArgs::default()).unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(
            &path,
            "TargetRuntimeFramework: netcore-6.0\nInternalTraceLevel: Info\n",
        )
        .unwrap();

        let args = SettingsArgs {
            settings_file: Some(path),
            overrides: vec!["InternalTraceLevel=Debug".to_string()],
        };
        let settings = load_settings(&args).unwrap();

        assert_eq!(
            settings.get(names::TARGET_RUNTIME_FRAMEWORK),
            Some(&SettingValue::from("netcore-6.0"))
        );
        assert_eq!(
            settings.get(names::INTERNAL_TRACE_LEVEL),
            Some(&SettingValue::from("Debug"))
        );
    }

    #[test]
    fn test_missing_settings_file_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = SettingsArgs {
            settings_file: Some(temp_dir.path().join("nope.yaml")),
            overrides: Vec::new(),
        };
        let err = load_settings(&args).unwrap_err();
        assert_eq!(err.exit_code(), agent_launcher::exit_codes::USER_ERROR);
    }
}
