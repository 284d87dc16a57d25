//! Implementation of the `agent-launcher check` command.

use super::load_settings;
use crate::cli::CheckArgs;
use agent_launcher::error::{LauncherError, Result};
use agent_launcher::launcher::{LauncherRegistry, default_install_dir};
use agent_launcher::package::TestPackage;
use agent_launcher::settings::names;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let registry = LauncherRegistry::builtin(&default_install_dir());
    let name = check(&registry, args)?;
    println!("{}", name);
    Ok(())
}

/// Name of the launcher that would run the package.
fn check(registry: &LauncherRegistry, args: CheckArgs) -> Result<String> {
    let mut package = TestPackage::new("");
    package.settings = load_settings(&args.settings)?;
    if let Some(runtime) = args.runtime {
        package.settings.set(names::TARGET_RUNTIME_FRAMEWORK, runtime);
    }

    registry
        .select(&package)
        .map(|launcher| launcher.info().name)
        .ok_or_else(|| LauncherError::NoLauncher {
            runtime: package.target_runtime(),
        })
}
