//! Implementation of the `agent-launcher list` command.

use crate::cli::ListArgs;
use agent_launcher::error::{LauncherError, Result};
use agent_launcher::launcher::{AgentInfo, LauncherRegistry, default_install_dir};

pub fn cmd_list(args: ListArgs) -> Result<()> {
    let registry = LauncherRegistry::builtin(&default_install_dir());
    println!("{}", render(&registry.infos(), args.json)?);
    Ok(())
}

fn render(infos: &[AgentInfo], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(infos).map_err(|e| {
            LauncherError::UserError(format!("failed to serialize launcher list: {}", e))
        });
    }

    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    Ok(infos
        .iter()
        .map(|i| format!("{:width$}  {:?}  {}", i.name, i.agent_type, i.target_framework))
        .collect::<Vec<_>>()
        .join("\n"))
}
