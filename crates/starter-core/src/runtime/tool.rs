//! Host toolchain checks
//!
//! Setup shells out to composer and php. When they run on the host (no Sail)
//! both must be on PATH.

use anyhow::Result;
use colored::Colorize;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "composer")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// URL to the installation docs
    pub docs_url: &'static str,
}

/// Manager for checking a CLI tool on the host
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// First line of `<tool> --version`, if it runs
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .and_then(|s| s.lines().next().map(|l| l.trim().to_string()))
    }

    /// Open the tool's documentation in the default browser
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!("Opening {} documentation in your browser...", self.config.display_name).cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}

/// Tools the setup needs on the host
pub fn host_tools(composer_docs_url: &'static str) -> Vec<ToolManager> {
    vec![
        ToolManager::new(ToolConfig {
            name: "php",
            display_name: "PHP",
            docs_url: "https://www.php.net/manual/en/install.php",
        }),
        ToolManager::new(ToolConfig {
            name: "composer",
            display_name: "Composer",
            docs_url: composer_docs_url,
        }),
    ]
}
