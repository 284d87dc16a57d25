//! Agent launchers.
//!
//! A launcher decides whether it can run a package under the package's
//! target runtime and, if so, describes the agent process to start:
//!
//! - **Pluggable**: the netcore launcher variants, one per runtime ceiling
//! - **Registry**: the statically registered variants, tried in order
//!
//! # Selection
//!
//! The caller asks each registered launcher in turn whether it can create a
//! process for the package. The first one that accepts builds the
//! descriptor. A launcher asked to create a process for a package it does
//! not support returns `None`; that is the signal to try another launcher,
//! not an error.

mod pluggable;
mod registry;


use crate::launch::LaunchDescriptor;
use crate::package::TestPackage;
use serde::Serialize;
use uuid::Uuid;

// Re-export public API
pub use pluggable::{PluggableAgentLauncher, default_install_dir};
pub use registry::LauncherRegistry;

/// Where an agent runs relative to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgentType {
    /// A separate process on the local machine.
    LocalProcess,
}

/// Descriptive metadata of a launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentInfo {
    /// Launcher name, e.g. `Net80AgentLauncher`.
    pub name: String,
    pub agent_type: AgentType,
    /// Framework name of the highest runtime supported, e.g.
    /// `.NETCoreApp,Version=v8.0`.
    pub target_framework: String,
}

/// A launcher able to start test agents for some set of runtimes.
pub trait AgentLauncher: Send + Sync {
    /// Metadata describing this launcher.
    fn info(&self) -> AgentInfo;

    /// Whether this launcher can run `package`.
    fn can_create_process(&self, package: &TestPackage) -> bool;

    /// Describe the agent process for `package`.
    ///
    /// With a non-empty `agency_url` the agent reports to that agency under
    /// `agent_id`; otherwise it runs the package directly. Returns `None` if
    /// [`AgentLauncher::can_create_process`] rejects the package.
    fn create_process(
        &self,
        agent_id: Uuid,
        agency_url: Option<&str>,
        package: &TestPackage,
    ) -> Option<LaunchDescriptor>;

    /// Describe an agent process that runs `package` directly.
    fn create_direct_process(&self, package: &TestPackage) -> Option<LaunchDescriptor> {
        self.create_process(Uuid::nil(), None, package)
    }
}
