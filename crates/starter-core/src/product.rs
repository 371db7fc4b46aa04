//! Starter kit configuration trait for CLI binaries
//!
//! Each binary implements this trait to describe the kit it sets up.

use crate::packages::Selection;
use crate::runtime::Commands;
use std::path::Path;

/// Configuration trait for a starter kit
///
/// Each kit defines:
/// - Identity (display name)
/// - Env file locations
/// - Toolchain documentation links
/// - Post-setup instructions
pub trait KitConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Env file, relative to the project root
    fn env_file(&self) -> &'static str {
        ".env"
    }

    /// Template the env file is created from, relative to the project root
    fn env_template(&self) -> &'static str {
        ".env.example"
    }

    /// Where to send the operator when composer is missing
    fn composer_docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after setup
    fn next_steps(&self, root: &Path, commands: &Commands, selection: &Selection) -> Vec<String>;
}
