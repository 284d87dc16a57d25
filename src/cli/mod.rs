//! CLI argument parsing for agent-launcher.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// Agent launcher: choose the agent able to run a test package and show how
/// it would be started.
///
/// Launchers are tried in order; the first whose runtime range covers the
/// package's `TargetRuntimeFramework` setting builds the launch descriptor.
/// Nothing is ever started.
#[derive(Parser, Debug)]
#[command(name = "agent-launcher")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for agent-launcher.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered agent launchers.
    List(ListArgs),

    /// Report which launcher supports a runtime or package.
    ///
    /// Exits with code 2 when no launcher supports it.
    Check(CheckArgs),

    /// Print the launch descriptor for a test package.
    ///
    /// Exits with code 2 when no launcher supports the package.
    Describe(DescribeArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print launcher metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Runtime identifier to check, e.g. netcore-8.0. Overrides any
    /// TargetRuntimeFramework from the package settings.
    #[arg(short, long)]
    pub runtime: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Arguments for the `describe` command.
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Full path of the test assembly.
    pub package: String,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Correlation id for agency mode. Random when omitted.
    #[arg(long)]
    pub agent_id: Option<Uuid>,

    /// Agency callback address. Without it the agent runs the package directly.
    #[arg(long)]
    pub agency_url: Option<String>,

    /// Directory containing the agent/ folder. Defaults to the directory of
    /// this executable.
    #[arg(long)]
    pub install_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Package settings sources shared by `check` and `describe`.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// YAML file with package settings (flat NAME: value mapping).
    #[arg(long = "settings")]
    pub settings_file: Option<PathBuf>,

    /// Set a package setting, e.g. --set InternalTraceLevel=Debug.
    /// Overrides values from --settings.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub overrides: Vec<String>,
}

/// Output formats for `describe`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// The descriptor as JSON.
    Json,
    /// A single POSIX shell command line.
    Shell,
}
