//! Test packages as seen by agent launchers.

use crate::settings::{LaunchSettings, PackageSettings, SettingValue, names};

/// A test package: the assembly to run plus its settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestPackage {
    /// Full name (normally the absolute path) of the test assembly.
    pub full_name: String,
    /// Settings attached by the caller.
    pub settings: PackageSettings,
}

impl TestPackage {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            settings: PackageSettings::new(),
        }
    }

    /// Builder-style setting assignment.
    pub fn with_setting(mut self, name: &str, value: impl Into<SettingValue>) -> Self {
        self.settings.set(name, value);
        self
    }

    /// The declared target runtime, or `""` when none is set.
    pub fn target_runtime(&self) -> String {
        crate::settings::resolve(
            &self.settings,
            names::TARGET_RUNTIME_FRAMEWORK,
            String::new(),
        )
    }

    /// Resolve all launch settings of this package.
    pub fn launch_settings(&self) -> LaunchSettings {
        LaunchSettings::from_store(&self.settings)
    }
}
