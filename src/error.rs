//! Error types for the agent-launcher CLI surface.
//!
//! The launcher core never fails: an unsupported runtime is reported as
//! `None`, and malformed settings fall back to their defaults. Errors only
//! arise at the boundary, when settings are read from disk or parsed from
//! the command line.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for agent-launcher operations.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// User provided invalid arguments or an unusable settings file.
    #[error("{0}")]
    UserError(String),

    /// No registered launcher accepts the package's target runtime.
    #[error("no agent launcher supports target runtime '{runtime}'")]
    NoLauncher { runtime: String },
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::UserError(_) => exit_codes::USER_ERROR,
            LauncherError::NoLauncher { .. } => exit_codes::NO_LAUNCHER,
        }
    }
}

/// Result type alias for agent-launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
