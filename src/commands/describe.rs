//! Implementation of the `agent-launcher describe` command.

use super::load_settings;
use crate::cli::{DescribeArgs, OutputFormat};
use agent_launcher::error::{LauncherError, Result};
use agent_launcher::launch::{LaunchDescriptor, LaunchMode};
use agent_launcher::launcher::{LauncherRegistry, default_install_dir};
use agent_launcher::package::TestPackage;
use uuid::Uuid;

/// Execute the `agent-launcher describe` command.
///
/// 1. Builds the package from its path and settings
/// 2. Selects the first launcher supporting its target runtime
/// 3. Prints the resulting launch descriptor in the requested format
pub fn cmd_describe(args: DescribeArgs) -> Result<()> {
    let install_dir = args.install_dir.clone().unwrap_or_else(default_install_dir);
    let registry = LauncherRegistry::builtin(&install_dir);
    let format = args.format;

    let descriptor = describe(&registry, args)?;
    println!("{}", render(&descriptor, format)?);
    Ok(())
}

fn describe(registry: &LauncherRegistry, args: DescribeArgs) -> Result<LaunchDescriptor> {
    let mut package = TestPackage::new(args.package);
    package.settings = load_settings(&args.settings)?;

    let agent_id = args.agent_id.unwrap_or_else(Uuid::new_v4);
    registry
        .create_process(agent_id, args.agency_url.as_deref(), &package)
        .ok_or_else(|| LauncherError::NoLauncher {
            runtime: package.target_runtime(),
        })
}

fn render(descriptor: &LaunchDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(descriptor).map_err(|e| {
            LauncherError::UserError(format!("failed to serialize launch descriptor: {}", e))
        }),
        OutputFormat::Shell => Ok(descriptor.to_shell_line()),
        OutputFormat::Text => Ok(render_text(descriptor)),
    }
}

fn render_text(descriptor: &LaunchDescriptor) -> String {
    let mode = match descriptor.mode() {
        LaunchMode::Agency { agency_url, .. } => format!("agency ({})", agency_url),
        LaunchMode::Direct { .. } => "direct".to_string(),
    };
    let flags = descriptor.flags();

    let mut out = String::new();
    out.push_str(&format!("Program:           {}\n", descriptor.program()));
    out.push_str(&format!("Arguments:         {}\n", descriptor.arguments()));
    out.push_str(&format!(
        "Working directory: {}\n",
        descriptor.working_directory().display()
    ));
    out.push_str(&format!("Mode:              {}\n", mode));
    out.push_str(&format!("Shell execute:     {}\n", flags.use_shell_execute));
    out.push_str(&format!("Create no window:  {}\n", flags.create_no_window));
    out.push_str(&format!("Raise exit events: {}\n", flags.enable_raising_events));
    out.push_str(&format!("Load user profile: {}", flags.load_user_profile));
    out
}
