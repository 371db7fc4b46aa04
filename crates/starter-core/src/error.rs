//! Errors that stop the setup run

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(
        "Could not find a project root (no composer.json in {} or its parents)",
        .searched.display()
    )]
    ProjectRootNotFound { searched: PathBuf },

    #[error("Project root does not exist or is not a directory: {}", .0.display())]
    InvalidProjectRoot(PathBuf),

    #[error("Failed to copy {} to {}", .from.display(), .to.display())]
    EnvCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    EnvRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    EnvWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package specifier: '{0}'")]
    InvalidSpecifier(String),
}
