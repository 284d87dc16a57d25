//! The netcore pluggable agent launchers.

use super::{AgentInfo, AgentLauncher, AgentType};
use crate::launch::{
    AgentIdentity, LaunchDescriptor, LaunchMode, ProcessFlags, build_agent_arguments,
};
use crate::package::TestPackage;
use crate::runtime::RuntimeRange;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Subdirectory of the install directory holding the agent assemblies.
const AGENT_DIR: &str = "agent";

/// Framework identifier reported for netcore runtimes.
const NETCORE_FRAMEWORK: &str = ".NETCoreApp";

/// A launcher for one `netcore-` runtime ceiling.
///
/// The agent assembly lives at `<install_dir>/agent/<agent_file_name>` and
/// is started under the `dotnet` host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluggableAgentLauncher {
    name: String,
    runtimes: RuntimeRange,
    agent_file_name: String,
    install_dir: PathBuf,
}

impl PluggableAgentLauncher {
    pub fn new(
        name: impl Into<String>,
        runtimes: RuntimeRange,
        agent_file_name: impl Into<String>,
        install_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            runtimes,
            agent_file_name: agent_file_name.into(),
            install_dir: install_dir.into(),
        }
    }

    /// Launcher for runtimes up to .NET 6.0.
    pub fn net60(install_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            "Net60AgentLauncher",
            RuntimeRange::netcore_up_to(6),
            "testcentric-net60-agent.dll",
            install_dir,
        )
    }

    /// Launcher for runtimes up to .NET 7.0.
    pub fn net70(install_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            "Net70AgentLauncher",
            RuntimeRange::netcore_up_to(7),
            "testcentric-net70-agent.dll",
            install_dir,
        )
    }

    /// Launcher for runtimes up to .NET 8.0.
    pub fn net80(install_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            "Net80AgentLauncher",
            RuntimeRange::netcore_up_to(8),
            "testcentric-net80-agent.dll",
            install_dir,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Whether this launcher can host `runtime`.
    pub fn supports(&self, runtime: &str) -> bool {
        self.runtimes.supports(runtime)
    }

    /// Path of the agent assembly this launcher starts.
    pub fn agent_path(&self) -> PathBuf {
        self.install_dir.join(AGENT_DIR).join(&self.agent_file_name)
    }

    fn target_framework(&self) -> String {
        format!(
            "{},Version=v{}.0",
            NETCORE_FRAMEWORK,
            self.runtimes.max_major()
        )
    }

    fn describe(&self, identity: &AgentIdentity, package: &TestPackage) -> LaunchDescriptor {
        let settings = package.launch_settings();
        let mode = LaunchMode::for_identity(identity, package);
        let agent_arguments = build_agent_arguments(&mode, &settings);
        let flags = ProcessFlags::new(&mode, &settings);

        let descriptor = LaunchDescriptor::new(
            self.agent_path(),
            &agent_arguments,
            current_dir(),
            mode,
            flags,
        );
        debug!(
            launcher = %self.name,
            program = descriptor.program(),
            arguments = descriptor.arguments(),
            "created agent launch descriptor"
        );
        descriptor
    }
}

impl AgentLauncher for PluggableAgentLauncher {
    fn info(&self) -> AgentInfo {
        AgentInfo {
            name: self.name.clone(),
            agent_type: AgentType::LocalProcess,
            target_framework: self.target_framework(),
        }
    }

    fn can_create_process(&self, package: &TestPackage) -> bool {
        self.supports(&package.target_runtime())
    }

    fn create_process(
        &self,
        agent_id: Uuid,
        agency_url: Option<&str>,
        package: &TestPackage,
    ) -> Option<LaunchDescriptor> {
        // Only reachable for runtimes this launcher can handle.
        if !self.can_create_process(package) {
            debug!(
                launcher = %self.name,
                package = %package.full_name,
                "package runtime not supported"
            );
            return None;
        }

        let identity = AgentIdentity::new(agent_id, agency_url.map(str::to_string));
        Some(self.describe(&identity, package))
    }
}

/// Directory containing the running executable.
///
/// Falls back to `.` if the executable location cannot be determined.
pub fn default_install_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(e) => {
            warn!(error = %e, "cannot locate current executable, using '.' as install dir");
            PathBuf::from(".")
        }
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        warn!(error = %e, "cannot read current directory, using '.'");
        PathBuf::from(".")
    })
}
