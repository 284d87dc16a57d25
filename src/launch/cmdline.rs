//! Agent command-line construction.

use super::descriptor::LaunchMode;
use super::escape::escape_argument;
use crate::settings::LaunchSettings;

/// Build the argument string passed to the agent after its own path.
///
/// Agency mode starts with `--agentId=<id> --agencyUrl=<url> --pid=<pid>`;
/// direct mode starts with the package path. Optional flags follow in a
/// fixed order and only when their setting differs from the default:
/// `--trace=<level>`, `--debug-agent`, `--work=<dir>`.
pub fn build_agent_arguments(mode: &LaunchMode, settings: &LaunchSettings) -> String {
    let mut args = match mode {
        LaunchMode::Agency {
            agent_id,
            agency_url,
            parent_pid,
        } => format!(
            "--agentId={} --agencyUrl={} --pid={}",
            agent_id,
            escape_argument(agency_url),
            parent_pid
        ),
        LaunchMode::Direct { package } => escape_argument(package),
    };

    // Options that must be in effect before the package is loaded.
    if settings.trace_enabled() {
        args.push_str(" --trace=");
        args.push_str(&escape_argument(&settings.trace_level));
    }
    if settings.debug_agent {
        args.push_str(" --debug-agent");
    }
    if settings.has_work_directory() {
        args.push_str(" --work=");
        args.push_str(&escape_argument(&settings.work_directory));
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::split_arguments;
    use uuid::Uuid;

    fn agency_mode() -> LaunchMode {
        LaunchMode::Agency {
            agent_id: Uuid::parse_str("6f1c2b1e-3f7a-4c55-9d0e-2a4b6c8d0e1f").unwrap(),
            agency_url: "tcp://127.0.0.1:1234/TestAgency".to_string(),
            parent_pid: 4242,
        }
    }

    #[test]
    fn test_agency_prefix() {
        let args = build_agent_arguments(&agency_mode(), &LaunchSettings::default());
        assert_eq!(
            args,
            "--agentId=6f1c2b1e-3f7a-4c55-9d0e-2a4b6c8d0e1f \
             --agencyUrl=tcp://127.0.0.1:1234/TestAgency --pid=4242"
        );
    }

    #[test]
    fn test_direct_mode_uses_package_path() {
        let mode = LaunchMode::Direct {
            package: "/tests/mock-assembly.dll".to_string(),
        };
        let args = build_agent_arguments(&mode, &LaunchSettings::default());
        assert_eq!(args, "/tests/mock-assembly.dll");
    }

    #[test]
    fn test_direct_mode_escapes_package_path() {
        let mode = LaunchMode::Direct {
            package: "/my tests/mock-assembly.dll".to_string(),
        };
        let args = build_agent_arguments(&mode, &LaunchSettings::default());
        assert_eq!(
            split_arguments(&args),
            vec!["/my tests/mock-assembly.dll".to_string()]
        );
    }

    #[test]
    fn test_defaults_emit_no_optional_flags() {
        let args = build_agent_arguments(&agency_mode(), &LaunchSettings::default());
        assert!(!args.contains("--trace="));
        assert!(!args.contains("--debug-agent"));
        assert!(!args.contains("--work="));
    }

    #[test]
    fn test_optional_flags_in_fixed_order() {
        let settings = LaunchSettings {
            trace_level: "Debug".to_string(),
            debug_agent: true,
            work_directory: "WORKDIRECTORY".to_string(),
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &settings);

        assert!(args.ends_with(" --pid=4242 --trace=Debug --debug-agent --work=WORKDIRECTORY"));
    }

    #[test]
    fn test_each_flag_independent() {
        let trace_only = LaunchSettings {
            trace_level: "Verbose".to_string(),
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &trace_only);
        assert!(args.contains("--trace=Verbose"));
        assert!(!args.contains("--debug-agent"));
        assert!(!args.contains("--work="));

        let debug_only = LaunchSettings {
            debug_agent: true,
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &debug_only);
        assert!(!args.contains("--trace="));
        assert!(args.contains("--debug-agent"));
        assert!(!args.contains("--work="));
    }

    #[test]
    fn test_debug_tests_is_not_emitted() {
        let settings = LaunchSettings {
            debug_tests: true,
            run_as_x86: true,
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &settings);
        assert!(!args.contains("debug"));
        assert!(!args.contains("x86"));
    }

    #[test]
    fn test_work_directory_with_spaces_is_escaped() {
        let settings = LaunchSettings {
            work_directory: "C:\\Test Results\\".to_string(),
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &settings);

        assert!(args.contains("--work=\"C:\\Test Results\\\\\""));
        let tokens = split_arguments(&args);
        assert_eq!(tokens.last().unwrap(), "--work=C:\\Test Results\\");
    }

    #[test]
    fn test_trace_level_is_case_sensitive() {
        let settings = LaunchSettings {
            trace_level: "off".to_string(),
            ..Default::default()
        };
        let args = build_agent_arguments(&agency_mode(), &settings);
        assert!(args.contains("--trace=off"));
    }
}
