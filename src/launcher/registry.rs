//! Statically registered launcher variants.

use super::{AgentInfo, AgentLauncher, PluggableAgentLauncher};
use crate::launch::LaunchDescriptor;
use crate::package::TestPackage;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// An ordered list of launchers, tried first to last.
#[derive(Default)]
pub struct LauncherRegistry {
    launchers: Vec<Box<dyn AgentLauncher>>,
}

impl LauncherRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in netcore launchers, lowest runtime ceiling first so a
    /// package gets the oldest agent able to host it.
    pub fn builtin(install_dir: &Path) -> Self {
        let mut registry = Self::new();
        registry.register(PluggableAgentLauncher::net60(install_dir));
        registry.register(PluggableAgentLauncher::net70(install_dir));
        registry.register(PluggableAgentLauncher::net80(install_dir));
        registry
    }

    /// Append a launcher after all existing ones.
    pub fn register<L: AgentLauncher + 'static>(&mut self, launcher: L) {
        self.launchers.push(Box::new(launcher));
    }

    pub fn len(&self) -> usize {
        self.launchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launchers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AgentLauncher> {
        self.launchers.iter().map(|l| l.as_ref())
    }

    /// Metadata of every registered launcher, in registration order.
    pub fn infos(&self) -> Vec<AgentInfo> {
        self.iter().map(|l| l.info()).collect()
    }

    /// The first launcher able to run `package`.
    pub fn select(&self, package: &TestPackage) -> Option<&dyn AgentLauncher> {
        let selected = self.iter().find(|l| l.can_create_process(package));
        match selected {
            Some(launcher) => debug!(
                package = %package.full_name,
                launcher = %launcher.info().name,
                "selected agent launcher"
            ),
            None => debug!(
                package = %package.full_name,
                runtime = %package.target_runtime(),
                "no agent launcher supports package"
            ),
        }
        selected
    }

    /// Select a launcher for `package` and describe its agent process.
    pub fn create_process(
        &self,
        agent_id: Uuid,
        agency_url: Option<&str>,
        package: &TestPackage,
    ) -> Option<LaunchDescriptor> {
        self.select(package)?
            .create_process(agent_id, agency_url, package)
    }
}
