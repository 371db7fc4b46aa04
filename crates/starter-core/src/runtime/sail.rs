//! Direct vs containerized command invocation
//!
//! When the project ships Laravel Sail, composer and artisan run inside the
//! container through the `sail` script instead of on the host.

use super::process::CommandLine;
use std::path::{Path, PathBuf};

/// Locations probed for the Sail script, relative to the project root
const SAIL_SCRIPTS: &[&str] = &["sail", "vendor/bin/sail"];

/// Flags always passed to `composer require`
const REQUIRE_FLAGS: &[&str] = &["--with-all-dependencies", "--no-interaction"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invoker {
    Direct,
    Container(PathBuf),
}

/// Builds composer and artisan command lines for a project
#[derive(Debug, Clone)]
pub struct Commands {
    root: PathBuf,
    invoker: Invoker,
}

impl Commands {
    pub fn new(root: &Path, invoker: Invoker) -> Self {
        Self {
            root: root.to_path_buf(),
            invoker,
        }
    }

    /// Probe the project root for an executable Sail script
    pub fn detect(root: &Path) -> Self {
        let invoker = SAIL_SCRIPTS
            .iter()
            .map(|rel| root.join(rel))
            .find(|path| is_executable(path))
            .map_or(Invoker::Direct, Invoker::Container);
        Self::new(root, invoker)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    pub fn in_container(&self) -> bool {
        matches!(self.invoker, Invoker::Container(_))
    }

    fn tool(&self, name: &str) -> CommandLine {
        match &self.invoker {
            Invoker::Direct => CommandLine::new(name, &self.root),
            Invoker::Container(script) => {
                CommandLine::new(script.display().to_string(), &self.root).arg(name)
            }
        }
    }

    /// `composer require` for the given specifiers
    pub fn composer_require<I, S>(&self, specifiers: I, dev: bool) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cmd = self.tool("composer").arg("require").args(REQUIRE_FLAGS.iter().copied());
        if dev {
            cmd = cmd.arg("--dev");
        }
        cmd.args(specifiers)
    }

    /// `php artisan <args>`
    pub fn artisan<I, S>(&self, args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool("php").arg("artisan").args(args)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
