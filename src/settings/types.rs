//! Setting values, the read-only store interface and the resolver.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Names of the settings recognized by agent launchers.
pub mod names {
    /// Runtime identifier the package targets, e.g. `netcore-8.0`.
    pub const TARGET_RUNTIME_FRAMEWORK: &str = "TargetRuntimeFramework";
    /// Run the package in a 32-bit process. Not used by the netcore launchers.
    pub const RUN_AS_X86: &str = "RunAsX86";
    /// The tests themselves are being debugged.
    pub const DEBUG_TESTS: &str = "DebugTests";
    /// Pause the agent at startup so a debugger can attach.
    pub const DEBUG_AGENT: &str = "DebugAgent";
    /// Internal trace level handed to the agent.
    pub const INTERNAL_TRACE_LEVEL: &str = "InternalTraceLevel";
    /// Load the user profile when the agent process starts.
    pub const LOAD_USER_PROFILE: &str = "LoadUserProfile";
    /// Directory the agent writes its results and logs to.
    pub const WORK_DIRECTORY: &str = "WorkDirectory";
}

/// A single setting value.
///
/// Only strings and booleans are meaningful to launchers. Any other shape is
/// kept as-is so a settings file round-trips, but resolves to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    String(String),
    Other(serde_yaml::Value),
}

impl SettingValue {
    /// Parse a value given on the command line.
    ///
    /// `true` and `false` become booleans; everything else stays a string.
    pub fn parse_cli(raw: &str) -> Self {
        match raw {
            "true" => SettingValue::Bool(true),
            "false" => SettingValue::Bool(false),
            _ => SettingValue::String(raw.to_string()),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

/// Read-only access to a package's settings.
pub trait SettingsStore {
    /// Look up the raw value stored under `name`.
    fn get_setting(&self, name: &str) -> Option<&SettingValue>;
}

impl SettingsStore for BTreeMap<String, SettingValue> {
    fn get_setting(&self, name: &str) -> Option<&SettingValue> {
        self.get(name)
    }
}

impl SettingsStore for HashMap<String, SettingValue> {
    fn get_setting(&self, name: &str) -> Option<&SettingValue> {
        self.get(name)
    }
}

/// Types a setting value can be resolved into.
pub trait FromSetting: Sized {
    /// Extract `Self` from `value`, or `None` if the value has another shape.
    fn from_setting(value: &SettingValue) -> Option<Self>;
}

impl FromSetting for String {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromSetting for bool {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Resolve a setting, falling back to `default` when the key is absent or
/// holds a value of the wrong shape.
pub fn resolve<S, T>(settings: &S, name: &str, default: T) -> T
where
    S: SettingsStore + ?Sized,
    T: FromSetting,
{
    settings
        .get_setting(name)
        .and_then(T::from_setting)
        .unwrap_or(default)
}

/// Key/value settings attached to a test package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageSettings {
    values: BTreeMap<String, SettingValue>,
}

impl PackageSettings {
    /// Create an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`PackageSettings::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up the raw value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    /// Whether a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Copy every entry of `other` into `self`, overriding existing keys.
    pub fn merge(&mut self, other: PackageSettings) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl SettingsStore for PackageSettings {
    fn get_setting(&self, name: &str) -> Option<&SettingValue> {
        self.get(name)
    }
}
