//! Package-specific artisan commands after installation

use super::{execute, FailedStep};
use crate::packages::{Package, Selection, FILAMENT_USER_COMMAND};
use crate::prompt::Prompter;
use crate::runtime::{CommandRunner, Commands};
use anyhow::Result;

/// Run the directives of every selected package, runtime list first
///
/// Packages without directives are skipped silently. Failures are collected
/// and the remaining commands still run.
pub async fn run_post_install<P: Prompter, R: CommandRunner>(
    prompter: &mut P,
    runner: &mut R,
    commands: &Commands,
    selection: &Selection,
) -> Result<Vec<FailedStep>> {
    let mut failures = Vec::new();

    for spec in selection.iter() {
        let Some(package) = spec.package() else {
            continue;
        };

        failures.extend(run_directives(prompter, runner, commands, package).await?);

        if package.offers_admin_user() {
            failures.extend(maybe_create_admin_user(prompter, runner, commands).await?);
        }
    }

    Ok(failures)
}

async fn run_directives<P: Prompter, R: CommandRunner>(
    prompter: &mut P,
    runner: &mut R,
    commands: &Commands,
    package: Package,
) -> Result<Vec<FailedStep>> {
    let mut failures = Vec::new();

    for directive in package.directives() {
        let command = commands.artisan(directive.args(commands.in_container()));
        let failure = format!(
            "Post-install command failed for {}: {}",
            package.name(),
            command
        );
        if let Some(failed) = execute(prompter, runner, &command, &failure).await? {
            failures.push(failed);
        }
    }

    Ok(failures)
}

async fn maybe_create_admin_user<P: Prompter, R: CommandRunner>(
    prompter: &mut P,
    runner: &mut R,
    commands: &Commands,
) -> Result<Option<FailedStep>> {
    let command = commands.artisan([FILAMENT_USER_COMMAND]).interactive();

    // make:filament-user asks for name, email and password.
    if !prompter.is_interactive() {
        prompter.info(&format!("Create an admin user later with: {}", command))?;
        return Ok(None);
    }

    if !prompter.confirm("Create an admin user for Filament now?", true)? {
        return Ok(None);
    }

    execute(prompter, runner, &command, "Failed to create Filament user.").await
}
