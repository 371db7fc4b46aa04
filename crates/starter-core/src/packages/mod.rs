//! Package model
//!
//! This module provides:
//! - Specifier parsing and the closed set of known packages
//! - The runtime/dev selection built by the prompts
//! - The static post-install directive table

pub mod directives;
pub mod selection;
pub mod specifier;

pub use directives::{Directive, FILAMENT_USER_COMMAND};
pub use selection::{Selection, Target};
pub use specifier::{Package, Specifier};
