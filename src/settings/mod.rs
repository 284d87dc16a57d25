//! Package settings for agent launchers.
//!
//! A package carries a flat key/value store of settings owned by the caller.
//! Launchers only ever read it: values are resolved once, at the boundary,
//! into the typed [`LaunchSettings`] structure whose `Default` holds the
//! documented default for every recognized setting.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::LaunchSettings;
pub use types::{FromSetting, PackageSettings, SettingValue, SettingsStore, names, resolve};
