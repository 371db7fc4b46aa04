//! Starter Core - Shared library for starter kit setup CLIs
//!
//! This library asks the operator which optional packages a Laravel starter
//! kit should get, installs them with composer and runs each package's
//! follow-up artisan commands.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Specifier parsing, `.env` editing, process execution
//! - **Layer 2: Workflow Orchestration** - `KitConfig` trait and the `workflow` stages,
//!   driven through the `Prompter` and `CommandRunner` seams
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{workflow, runtime::{Commands, ProcessRunner}, HostIds};
//!
//! let commands = Commands::detect(&root);
//! let mut runner = ProcessRunner::default();
//! let report = workflow::run_setup(&MyKit, &mut my_prompter, &mut runner, &commands,
//!     &workflow::SetupOptions::default(), HostIds::detect()).await?;
//! ```

pub mod config;
pub mod error;
pub mod packages;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::HostIds;
pub use error::SetupError;
pub use packages::{Package, Selection, Specifier, Target};
pub use product::KitConfig;
pub use prompt::{AssumeDefaults, Choice, Prompter};
pub use workflow::{FailedStep, SetupOptions, SetupReport};

#[cfg(feature = "tui")]
pub use tui::run;
