//! Launch descriptor construction.
//!
//! - **Escape**: quoting of single argument values and the matching tokenizer
//! - **Cmdline**: the agent argument string for a launch mode and settings
//! - **Descriptor**: the process description handed back to the caller
//!
//! Nothing in here starts a process. The caller owns the spawn and every
//! part of the child's lifecycle.

mod cmdline;
mod descriptor;
pub mod escape;

// Re-export public API
pub use cmdline::build_agent_arguments;
pub use descriptor::{AgentIdentity, LaunchDescriptor, LaunchMode, ProcessFlags, RUNTIME_HOST};
pub use escape::{escape_argument, split_arguments};
