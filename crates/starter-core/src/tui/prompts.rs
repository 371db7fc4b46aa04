//! Charm-style CLI prompts using cliclack

use crate::config::{resolve_project_root, HostIds};
use crate::packages::Specifier;
use crate::product::KitConfig;
use crate::prompt::{AssumeDefaults, Choice, Prompter};
use crate::runtime::{tool, Commands, Invoker, ProcessRunner, DEFAULT_TIMEOUT};
use crate::workflow::{run_setup, SetupOptions, SetupReport};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for the setup command
#[derive(Debug, Clone)]
pub struct SetupArgs {
    /// Project root; discovered from the working directory when absent
    pub project_root: Option<PathBuf>,

    /// Skip post-install artisan commands
    pub no_post: bool,

    /// Accept every default without prompting
    pub yes: bool,

    /// Time limit for each external command
    pub timeout: Duration,

    /// Extra runtime specifiers
    pub require: Vec<String>,

    /// Extra dev specifiers
    pub require_dev: Vec<String>,

    /// Skip the php/composer availability check
    pub skip_tool_check: bool,
}

impl Default for SetupArgs {
    fn default() -> Self {
        Self {
            project_root: None,
            no_post: false,
            yes: false,
            timeout: DEFAULT_TIMEOUT,
            require: Vec::new(),
            require_dev: Vec::new(),
            skip_tool_check: false,
        }
    }
}

/// [`Prompter`] backed by cliclack
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
    }

    fn select<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
        default: &T,
    ) -> Result<T> {
        let mut select = cliclack::select(prompt);
        for choice in choices {
            select = select.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        Ok(select.initial_value(default.clone()).interact()?)
    }

    fn multiselect<T: Clone + Eq + 'static>(
        &mut self,
        prompt: &str,
        choices: &[Choice<T>],
    ) -> Result<Vec<T>> {
        let mut multi = cliclack::multiselect(prompt);
        for choice in choices {
            multi = multi.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        Ok(multi.required(false).interact()?)
    }

    fn input_number(&mut self, prompt: &str, default: u32) -> Result<u32> {
        let default = default.to_string();
        let input: String = cliclack::input(prompt)
            .placeholder(&default)
            .default_input(&default)
            .validate(|input: &String| {
                input
                    .trim()
                    .parse::<u32>()
                    .map(|_| ())
                    .map_err(|_| "Please enter a non-negative whole number")
            })
            .interact()?;

        input
            .trim()
            .parse()
            .with_context(|| format!("Invalid number: {}", input))
    }

    fn info(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::info(message)?)
    }

    fn step(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::step(message)?)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::success(message)?)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::warning(message)?)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        Ok(cliclack::log::error(message)?)
    }
}

/// Run the setup with interactive prompts
pub async fn run<C: KitConfig>(config: &C, args: SetupArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve project root
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let root = resolve_project_root(args.project_root.as_deref(), &cwd)?;
    cliclack::log::info(format!("Project root: {}", root.display()))?;

    let options = SetupOptions {
        skip_post: args.no_post,
        require: parse_specifiers(&args.require)?,
        require_dev: parse_specifiers(&args.require_dev)?,
    };

    // Step 2: Pick direct or Sail invocation
    let commands = Commands::detect(&root);
    if let Invoker::Container(script) = commands.invoker() {
        cliclack::log::info(format!("Using Sail ({})", script.display()))?;
    }

    // Step 3: Check host tools (only needed outside the container)
    if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    } else if !commands.in_container() {
        handle_tool_check(config, &args)?;
    }

    // Step 4: Run the pipeline
    let mut runner = ProcessRunner::new(args.timeout);
    let detected = HostIds::detect();
    let report = if args.yes {
        let mut prompter = AssumeDefaults::new(ClackPrompter);
        run_setup(config, &mut prompter, &mut runner, &commands, &options, detected).await?
    } else {
        let mut prompter = ClackPrompter;
        run_setup(config, &mut prompter, &mut runner, &commands, &options, detected).await?
    };

    // Step 5: Summary and next steps
    print_summary(&report)?;
    print_next_steps(config, &commands, &report)?;

    Ok(())
}

fn parse_specifiers(raw: &[String]) -> Result<Vec<Specifier>> {
    raw.iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| Specifier::parse(s).map_err(Into::into))
        .collect()
}

fn handle_tool_check<C: KitConfig>(config: &C, args: &SetupArgs) -> Result<()> {
    for tool in tool::host_tools(config.composer_docs_url()) {
        let display_name = tool.config().display_name;

        if tool.is_installed() {
            let version = tool.get_version().unwrap_or_else(|| "unknown".to_string());
            cliclack::log::success(format!("{} installed ({})", display_name, version))?;
            continue;
        }

        cliclack::log::warning(format!("{} is not installed", display_name))?;

        // In non-interactive mode, just continue
        if args.yes {
            cliclack::log::info(format!("Continuing without {} (--yes mode)", display_name))?;
            continue;
        }

        let action: &str = cliclack::select("What would you like to do?")
            .item(
                "docs",
                format!("Open documentation ({})", tool.config().docs_url),
                "",
            )
            .item(
                "skip",
                format!("Continue without {} (installs will fail)", display_name),
                "",
            )
            .item("cancel", "Cancel setup", "")
            .interact()?;

        match action {
            "docs" => {
                tool.open_docs()?;
                cliclack::outro(format!(
                    "After installing {}, run this command again.",
                    display_name
                ))?;
                std::process::exit(0);
            }
            "cancel" => anyhow::bail!("Setup cancelled."),
            _ => {
                cliclack::log::info(format!(
                    "Continuing without {}. Refer to the docs for installation instructions: ({})",
                    display_name,
                    tool.config().docs_url
                ))?;
            }
        }
    }

    Ok(())
}

fn print_summary(report: &SetupReport) -> Result<()> {
    if report.failures.is_empty() {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} step(s) failed. Fix the cause and run setup again:",
        report.failures.len()
    ))?;
    for failed in &report.failures {
        println!("  - {} ({})", failed.description, failed.reason);
    }

    Ok(())
}

fn print_next_steps<C: KitConfig>(
    config: &C,
    commands: &Commands,
    report: &SetupReport,
) -> Result<()> {
    let steps = config.next_steps(commands.root(), commands, &report.selection);

    if !steps.is_empty() {
        println!();
        println!("  Next steps");
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
    }

    cliclack::outro("Setup complete.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specifiers_skips_blank_entries() {
        let raw = vec![
            "laravel/horizon".to_string(),
            " ".to_string(),
            "laravel/pint:^1.0".to_string(),
        ];
        let specs = parse_specifiers(&raw).unwrap();
        let rendered: Vec<_> = specs.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["laravel/horizon", "laravel/pint:^1.0"]);
    }

    #[test]
    fn test_parse_specifiers_rejects_missing_name() {
        let raw = vec![":^1.0".to_string()];
        assert!(parse_specifiers(&raw).is_err());
    }

    #[test]
    fn test_default_args() {
        let args = SetupArgs::default();
        assert_eq!(args.timeout, DEFAULT_TIMEOUT);
        assert!(!args.yes && !args.no_post && !args.skip_tool_check);
    }
}
