//! Launch descriptors and the values they are built from.

use super::escape::{escape_argument, split_arguments};
use crate::package::TestPackage;
use crate::settings::LaunchSettings;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

/// Program that hosts the agent assembly.
pub const RUNTIME_HOST: &str = "dotnet";

/// `CREATE_NO_WINDOW` process creation flag.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Caller-supplied identity of the agent being launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    /// Correlation id the agent reports back with.
    pub agent_id: Uuid,
    /// Address of the agency to call back; `None` or empty for direct runs.
    pub agency_url: Option<String>,
}

impl AgentIdentity {
    pub fn new(agent_id: Uuid, agency_url: Option<String>) -> Self {
        Self {
            agent_id,
            agency_url,
        }
    }

    /// Identity for running a package directly, without an agency.
    pub fn direct() -> Self {
        Self::new(Uuid::nil(), None)
    }
}

/// How the agent is driven once started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LaunchMode {
    /// The agent connects back to an agency and waits for work.
    Agency {
        agent_id: Uuid,
        agency_url: String,
        parent_pid: u32,
    },
    /// The agent runs the package given on its command line and exits.
    Direct { package: String },
}

impl LaunchMode {
    /// Pick the mode for `identity`: agency when an address is present.
    pub fn for_identity(identity: &AgentIdentity, package: &TestPackage) -> Self {
        match identity.agency_url.as_deref() {
            Some(url) if !url.is_empty() => LaunchMode::Agency {
                agent_id: identity.agent_id,
                agency_url: url.to_string(),
                parent_pid: std::process::id(),
            },
            _ => LaunchMode::Direct {
                package: package.full_name.clone(),
            },
        }
    }

    pub fn is_agency(&self) -> bool {
        matches!(self, LaunchMode::Agency { .. })
    }
}

/// Flags the caller applies when starting the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessFlags {
    /// Start through the OS shell. Always `false`.
    pub use_shell_execute: bool,
    /// Suppress the console window. Only set in agency mode.
    pub create_no_window: bool,
    /// Request exit notifications for the child. Always `true`.
    pub enable_raising_events: bool,
    /// Load the user profile before starting (Windows only).
    pub load_user_profile: bool,
    /// Child inherits the caller's environment. Always `true`.
    pub inherit_environment: bool,
}

impl ProcessFlags {
    pub fn new(mode: &LaunchMode, settings: &LaunchSettings) -> Self {
        let create_no_window = match mode {
            LaunchMode::Agency { .. } => true,
            LaunchMode::Direct { .. } => false,
        };
        Self {
            use_shell_execute: false,
            create_no_window,
            enable_raising_events: true,
            load_user_profile: settings.load_user_profile,
            inherit_environment: true,
        }
    }
}

/// Everything needed to start an agent process.
///
/// Building a descriptor never starts anything; see
/// [`LaunchDescriptor::to_command`] for handing it to `std::process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDescriptor {
    program: String,
    agent_path: PathBuf,
    arguments: String,
    working_directory: PathBuf,
    mode: LaunchMode,
    flags: ProcessFlags,
}

impl LaunchDescriptor {
    /// Assemble a descriptor running `agent_path` under the runtime host.
    ///
    /// `agent_arguments` must already be escaped, as produced by
    /// [`super::build_agent_arguments`].
    pub fn new(
        agent_path: PathBuf,
        agent_arguments: &str,
        working_directory: PathBuf,
        mode: LaunchMode,
        flags: ProcessFlags,
    ) -> Self {
        let arguments = format!(
            "{} {}",
            escape_argument(&agent_path.to_string_lossy()),
            agent_arguments
        );
        Self {
            program: RUNTIME_HOST.to_string(),
            agent_path,
            arguments,
            working_directory,
            mode,
            flags,
        }
    }

    /// Executable to start.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Location of the agent assembly, the first argument.
    pub fn agent_path(&self) -> &Path {
        &self.agent_path
    }

    /// Full escaped argument string: `<agentPath> <agentArguments>`.
    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// The argument string split into individual arguments.
    pub fn argv(&self) -> Vec<String> {
        split_arguments(&self.arguments)
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn mode(&self) -> &LaunchMode {
        &self.mode
    }

    pub fn flags(&self) -> ProcessFlags {
        self.flags
    }

    /// Render as a POSIX shell command line, e.g. for logs or copy/paste.
    pub fn to_shell_line(&self) -> String {
        let mut words = vec![self.program.clone()];
        words.extend(self.argv());
        shell_words::join(words)
    }

    /// Build an unstarted [`Command`] for this descriptor.
    ///
    /// The environment is inherited and stdio is left at its defaults; output
    /// capture, waiting and timeouts are up to the caller. User profile
    /// loading has no `std` equivalent and is not applied here.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.argv())
            .current_dir(&self.working_directory);
        apply_window_flags(&mut command, self.flags);
        command
    }
}

#[cfg(windows)]
fn apply_window_flags(command: &mut Command, flags: ProcessFlags) {
    use std::os::windows::process::CommandExt;

    if flags.create_no_window {
        command.creation_flags(CREATE_NO_WINDOW);
    }
}

#[cfg(not(windows))]
fn apply_window_flags(_command: &mut Command, _flags: ProcessFlags) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn sample_descriptor(agent_path: &str, agent_arguments: &str) -> LaunchDescriptor {
        let mode = LaunchMode::Direct {
            package: "junk.dll".to_string(),
        };
        let flags = ProcessFlags::new(&mode, &LaunchSettings::default());
        LaunchDescriptor::new(
            PathBuf::from(agent_path),
            agent_arguments,
            PathBuf::from("/work"),
            mode,
            flags,
        )
    }

    #[test]
    fn test_mode_from_identity() {
        let package = TestPackage::new("junk.dll");
        let id = Uuid::new_v4();

        let agency = LaunchMode::for_identity(
            &AgentIdentity::new(id, Some("tcp://localhost:1/Agency".to_string())),
            &package,
        );
        assert_eq!(
            agency,
            LaunchMode::Agency {
                agent_id: id,
                agency_url: "tcp://localhost:1/Agency".to_string(),
                parent_pid: std::process::id(),
            }
        );
        assert!(agency.is_agency());

        let empty = LaunchMode::for_identity(&AgentIdentity::new(id, Some(String::new())), &package);
        assert_eq!(
            empty,
            LaunchMode::Direct {
                package: "junk.dll".to_string()
            }
        );

        let none = LaunchMode::for_identity(&AgentIdentity::direct(), &package);
        assert!(!none.is_agency());
    }

    #[test]
    fn test_flags_by_mode() {
        let settings = LaunchSettings::default();
        let agency = LaunchMode::Agency {
            agent_id: Uuid::nil(),
            agency_url: "tcp://x".to_string(),
            parent_pid: 1,
        };
        let direct = LaunchMode::Direct {
            package: "junk.dll".to_string(),
        };

        let flags = ProcessFlags::new(&agency, &settings);
        assert!(!flags.use_shell_execute);
        assert!(flags.create_no_window);
        assert!(flags.enable_raising_events);
        assert!(!flags.load_user_profile);
        assert!(flags.inherit_environment);

        let flags = ProcessFlags::new(&direct, &settings);
        assert!(!flags.use_shell_execute);
        assert!(!flags.create_no_window);
        assert!(flags.enable_raising_events);
    }

    #[test]
    fn test_flags_load_user_profile_from_settings() {
        let settings = LaunchSettings {
            load_user_profile: true,
            ..Default::default()
        };
        let direct = LaunchMode::Direct {
            package: "junk.dll".to_string(),
        };
        assert!(ProcessFlags::new(&direct, &settings).load_user_profile);
    }

    #[test]
    fn test_arguments_start_with_agent_path() {
        let descriptor = sample_descriptor("/opt/launcher/agent/agent.dll", "junk.dll --debug-agent");

        assert_eq!(descriptor.program(), "dotnet");
        assert_eq!(
            descriptor.arguments(),
            "/opt/launcher/agent/agent.dll junk.dll --debug-agent"
        );
        assert_eq!(
            descriptor.argv(),
            vec!["/opt/launcher/agent/agent.dll", "junk.dll", "--debug-agent"]
        );
    }

    #[test]
    fn test_agent_path_with_spaces_is_escaped() {
        let descriptor = sample_descriptor("/opt/my launcher/agent/agent.dll", "junk.dll");

        assert_eq!(
            descriptor.argv(),
            vec!["/opt/my launcher/agent/agent.dll", "junk.dll"]
        );
    }

    #[test]
    fn test_to_command() {
        let descriptor = sample_descriptor("/opt/agent/agent.dll", "junk.dll --work=\"a b\"");
        let command = descriptor.to_command();

        assert_eq!(command.get_program(), OsStr::new("dotnet"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("/opt/agent/agent.dll"),
                OsStr::new("junk.dll"),
                OsStr::new("--work=a b")
            ]
        );
        assert_eq!(command.get_current_dir(), Some(Path::new("/work")));
        assert_eq!(command.get_envs().count(), 0);
    }

    #[test]
    fn test_to_shell_line() {
        let descriptor = sample_descriptor("/opt/agent/agent.dll", "junk.dll --work=\"a b\"");
        let line = descriptor.to_shell_line();

        assert_eq!(
            shell_words::split(&line).unwrap(),
            vec!["dotnet", "/opt/agent/agent.dll", "junk.dll", "--work=a b"]
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let descriptor = sample_descriptor("/opt/agent/agent.dll", "junk.dll");
        let value = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(value["program"], "dotnet");
        assert_eq!(value["mode"]["mode"], "direct");
        assert_eq!(value["mode"]["package"], "junk.dll");
        assert_eq!(value["flags"]["create_no_window"], false);
        assert_eq!(value["flags"]["enable_raising_events"], true);
    }
}
