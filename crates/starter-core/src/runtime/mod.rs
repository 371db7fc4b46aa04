//! Process execution and host tooling
//!
//! This module provides:
//! - Streamed, time-limited child process execution
//! - Direct vs Sail command construction
//! - Host tool checks for php and composer

pub mod process;
pub mod sail;
pub mod tool;

pub use process::{CommandLine, CommandRunner, Outcome, ProcessRunner, DEFAULT_TIMEOUT};
pub use sail::{Commands, Invoker};
pub use tool::ToolManager;
