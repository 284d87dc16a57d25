//! Agent launcher: picks the launcher able to run a test package under its
//! target runtime and builds the launch descriptor for the external test
//! agent process.
//!
//! ```no_run
//! use agent_launcher::launcher::{LauncherRegistry, default_install_dir};
//! use agent_launcher::package::TestPackage;
//! use agent_launcher::settings::names;
//! use uuid::Uuid;
//!
//! let registry = LauncherRegistry::builtin(&default_install_dir());
//! let package = TestPackage::new("/tests/mock-assembly.dll")
//!     .with_setting(names::TARGET_RUNTIME_FRAMEWORK, "netcore-8.0");
//!
//! if let Some(descriptor) =
//!     registry.create_process(Uuid::new_v4(), Some("tcp://127.0.0.1:1234/TestAgency"), &package)
//! {
//!     let _child = descriptor.to_command().spawn();
//! }
//! ```

pub mod error;
pub mod exit_codes;
pub mod launch;
pub mod launcher;
pub mod logging;
pub mod package;
pub mod runtime;
pub mod settings;

#[cfg(test)]
mod test_support;
