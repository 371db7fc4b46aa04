//! Project root resolution

use crate::error::SetupError;
use std::path::{Path, PathBuf};

/// File that marks a Laravel project root
const ROOT_MARKER: &str = "composer.json";

/// Resolve the project root
///
/// An explicit path must be an existing directory. Without one, the nearest
/// ancestor of `start` (inclusive) holding `composer.json` is used.
pub fn resolve_project_root(explicit: Option<&Path>, start: &Path) -> Result<PathBuf, SetupError> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            start.join(path)
        };
        if !path.is_dir() {
            return Err(SetupError::InvalidProjectRoot(path));
        }
        return Ok(path);
    }

    start
        .ancestors()
        .find(|dir| dir.join(ROOT_MARKER).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| SetupError::ProjectRootNotFound {
            searched: start.to_path_buf(),
        })
}
