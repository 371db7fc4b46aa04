//! The setup pipeline
//!
//! Stages run strictly in order: environment, selection, install, post-install.
//! The selection is built once and only read afterwards.

pub mod collect;
pub mod install;
pub mod post_install;

use crate::config::{configure_environment, HostIds};
use crate::packages::{Selection, Specifier, Target};
use crate::product::KitConfig;
use crate::prompt::Prompter;
use crate::runtime::{CommandLine, CommandRunner, Commands, Outcome};
use anyhow::Result;
use colored::Colorize;

pub use collect::collect_selection;
pub use install::install_packages;
pub use post_install::run_post_install;

/// Lines of captured stderr repeated in a failure report
const ERROR_TAIL_LINES: usize = 20;

/// An external command that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedStep {
    pub description: String,
    pub reason: String,
}

/// Options for one setup run
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Skip post-install artisan commands
    pub skip_post: bool,
    /// Extra runtime specifiers from the command line
    pub require: Vec<Specifier>,
    /// Extra dev specifiers from the command line
    pub require_dev: Vec<Specifier>,
}

/// What a setup run did
#[derive(Debug, Clone, Default)]
pub struct SetupReport {
    pub env: Option<HostIds>,
    pub selection: Selection,
    pub failures: Vec<FailedStep>,
}

/// Run all four stages
///
/// Only fatal errors (env file I/O, prompt I/O) are returned as `Err`.
pub async fn run_setup<C: KitConfig, P: Prompter, R: CommandRunner>(
    config: &C,
    prompter: &mut P,
    runner: &mut R,
    commands: &Commands,
    options: &SetupOptions,
    detected: HostIds,
) -> Result<SetupReport> {
    let env = configure_environment(
        prompter,
        commands.root(),
        config.env_file(),
        config.env_template(),
        detected,
    )?;

    let selection = collect_selection(prompter, &options.require, &options.require_dev)?;

    let mut report = SetupReport {
        env,
        selection,
        failures: Vec::new(),
    };

    if report.selection.is_empty() {
        prompter.info("No packages selected for installation.")?;
        return Ok(report);
    }

    for target in [Target::Runtime, Target::Dev] {
        let list = report.selection.list(target);
        let dev = target == Target::Dev;
        if let Some(failed) = install_packages(prompter, runner, commands, list, dev).await? {
            report.failures.push(failed);
        }
    }

    if options.skip_post {
        prompter.info("Skipping post-install commands.")?;
    } else {
        let failed = run_post_install(prompter, runner, commands, &report.selection).await?;
        report.failures.extend(failed);
    }

    Ok(report)
}

/// Run one command and report it if it fails
pub(crate) async fn execute<P: Prompter, R: CommandRunner>(
    prompter: &mut P,
    runner: &mut R,
    command: &CommandLine,
    failure: &str,
) -> Result<Option<FailedStep>> {
    prompter.step(&format!(
        "{} {}",
        "Running:".dimmed(),
        command.to_string().yellow()
    ))?;

    let (reason, stderr) = match runner.run(command).await {
        Ok(Outcome::Success) => return Ok(None),
        Ok(Outcome::Failed { code, stderr }) => {
            let reason = match code {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            (reason, stderr)
        }
        Ok(Outcome::TimedOut(after)) => (
            format!("timed out after {} seconds", after.as_secs()),
            String::new(),
        ),
        Err(e) => (format!("{:#}", e), String::new()),
    };

    prompter.warning(&format!("{} ({})", failure, reason))?;

    let tail = stderr_tail(&stderr);
    if !tail.is_empty() {
        prompter.error(&tail)?;
    }

    Ok(Some(FailedStep {
        description: failure.to_string(),
        reason,
    }))
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim_end().lines().collect();
    let start = lines.len().saturating_sub(ERROR_TAIL_LINES);
    lines[start..].join("\n")
}
