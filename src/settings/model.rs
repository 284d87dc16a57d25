//! Typed view of the settings a launcher consumes.

use super::types::{SettingsStore, names, resolve};
use tracing::trace;

/// Trace level value meaning "no internal tracing".
pub const TRACE_LEVEL_OFF: &str = "Off";

/// Settings consumed while building a launch descriptor.
///
/// Each field corresponds to one named package setting. `Default` carries
/// the value used when the setting is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// `TargetRuntimeFramework`, default `""` (unsupported everywhere).
    pub target_runtime: String,
    /// `RunAsX86`, default `false`. Read for completeness; a sibling x86
    /// launcher picks its binary from it.
    pub run_as_x86: bool,
    /// `DebugTests`, default `false`. Read but never emitted as a flag.
    pub debug_tests: bool,
    /// `DebugAgent`, default `false`. Emits `--debug-agent`.
    pub debug_agent: bool,
    /// `InternalTraceLevel`, default `"Off"`. Emits `--trace=<level>`.
    pub trace_level: String,
    /// `LoadUserProfile`, default `false`. Sets the process flag.
    pub load_user_profile: bool,
    /// `WorkDirectory`, default `""`. Emits `--work=<dir>`.
    pub work_directory: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            target_runtime: String::new(),
            run_as_x86: false,
            debug_tests: false,
            debug_agent: false,
            trace_level: TRACE_LEVEL_OFF.to_string(),
            load_user_profile: false,
            work_directory: String::new(),
        }
    }
}

impl LaunchSettings {
    /// Resolve every recognized setting from `store`.
    pub fn from_store<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let d = Self::default();
        let settings = Self {
            target_runtime: resolve(store, names::TARGET_RUNTIME_FRAMEWORK, d.target_runtime),
            run_as_x86: resolve(store, names::RUN_AS_X86, d.run_as_x86),
            debug_tests: resolve(store, names::DEBUG_TESTS, d.debug_tests),
            debug_agent: resolve(store, names::DEBUG_AGENT, d.debug_agent),
            trace_level: resolve(store, names::INTERNAL_TRACE_LEVEL, d.trace_level),
            load_user_profile: resolve(store, names::LOAD_USER_PROFILE, d.load_user_profile),
            work_directory: resolve(store, names::WORK_DIRECTORY, d.work_directory),
        };
        trace!(?settings, "resolved launch settings");
        settings
    }

    /// Whether `--trace=` should be passed to the agent.
    pub fn trace_enabled(&self) -> bool {
        self.trace_level != TRACE_LEVEL_OFF
    }

    /// Whether `--work=` should be passed to the agent.
    pub fn has_work_directory(&self) -> bool {
        !self.work_directory.is_empty()
    }
}
