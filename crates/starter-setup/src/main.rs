//! starter-setup - Interactive optional-package setup for the Laravel starter kit

use anyhow::Result;
use clap::Parser;
use starter_core::runtime::{Commands, Invoker};
use starter_core::tui::SetupArgs;
use starter_core::{KitConfig, Package, Selection};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Laravel starter kit configuration
#[derive(Clone)]
pub struct StarterKit;

impl KitConfig for StarterKit {
    fn display_name(&self) -> &'static str {
        "Laravel Starter Kit: Optional Setup"
    }

    fn composer_docs_url(&self) -> &'static str {
        "https://getcomposer.org/download/"
    }

    fn next_steps(&self, root: &Path, commands: &Commands, selection: &Selection) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to project if not current
        if current.as_deref() != Some(root) {
            steps.push(format!("cd {}", root.display()));
        }

        // Step 2: Start the app
        match commands.invoker() {
            Invoker::Container(script) => steps.push(format!("{} up -d", script.display())),
            Invoker::Direct => steps.push("php artisan serve".to_string()),
        }

        // Step 3: Point at what was installed
        if selection.contains(Package::Filament) || selection.contains(Package::MoonShine) {
            steps.push("Open /admin to sign in to the admin panel".to_string());
        }
        if selection.contains(Package::L5Swagger) {
            steps.push("Open /api/documentation to browse the API docs".to_string());
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "starter-setup")]
#[command(about = "Interactive setup for the Laravel starter kit")]
#[command(version)]
pub struct Args {
    /// Skip running post-install artisan commands
    #[arg(long = "no-post")]
    pub no_post: bool,

    /// Accept every default without prompting (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Laravel project root (defaults to the nearest directory with composer.json)
    #[arg(long = "project-root", env = "STARTER_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Time limit for each composer/artisan command, in seconds
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Extra packages to require (comma-separated: vendor/name[:constraint])
    #[arg(long, value_delimiter = ',')]
    pub require: Vec<String>,

    /// Extra dev packages to require (comma-separated: vendor/name[:constraint])
    #[arg(long = "require-dev", value_delimiter = ',')]
    pub require_dev: Vec<String>,

    /// Skip php/composer installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,
}

impl From<Args> for SetupArgs {
    fn from(args: Args) -> Self {
        SetupArgs {
            project_root: args.project_root,
            no_post: args.no_post,
            yes: args.yes,
            timeout: Duration::from_secs(args.timeout),
            require: args.require,
            require_dev: args.require_dev,
            skip_tool_check: args.skip_tool_check,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = starter_core::run(&StarterKit, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
