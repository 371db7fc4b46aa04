//! `composer require` for the selected packages

use super::{execute, FailedStep};
use crate::packages::Specifier;
use crate::prompt::Prompter;
use crate::runtime::{CommandRunner, Commands};
use anyhow::Result;
use std::collections::HashSet;

/// Install one list of specifiers
///
/// An empty list runs nothing. A failed install is reported and returned,
/// never propagated.
pub async fn install_packages<P: Prompter, R: CommandRunner>(
    prompter: &mut P,
    runner: &mut R,
    commands: &Commands,
    specifiers: &[Specifier],
    dev: bool,
) -> Result<Option<FailedStep>> {
    let mut seen = HashSet::new();
    let packages: Vec<String> = specifiers
        .iter()
        .filter(|s| seen.insert(s.name().to_string()))
        .map(ToString::to_string)
        .collect();

    if packages.is_empty() {
        return Ok(None);
    }

    let command = commands.composer_require(packages.iter().cloned(), dev);
    let failure = format!("Failed to install: {}", packages.join(", "));

    execute(prompter, runner, &command, &failure).await
}
