//! `.env` preparation: WWWUSER / WWWGROUP for Sail

use crate::error::SetupError;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::path::Path;

pub const USER_KEY: &str = "WWWUSER";
pub const GROUP_KEY: &str = "WWWGROUP";

/// Used when the host ids cannot be read
pub const FALLBACK_ID: u32 = 1000;

/// Numeric user and group ids written to the env file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostIds {
    pub uid: u32,
    pub gid: u32,
}

impl HostIds {
    /// Real uid/gid of this process
    #[cfg(unix)]
    pub fn detect() -> Self {
        // SAFETY: getuid/getgid take no arguments and cannot fail.
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };
        Self { uid, gid }
    }

    #[cfg(not(unix))]
    pub fn detect() -> Self {
        Self {
            uid: FALLBACK_ID,
            gid: FALLBACK_ID,
        }
    }
}

/// Set `key=value` in env file content
///
/// The first line starting with `key=` is replaced. Otherwise the line is
/// appended after trimming trailing line breaks, so the file ends with
/// exactly one newline. Every other line is left as is.
pub fn replace_or_append(content: &str, key: &str, value: &str) -> Result<String> {
    let line = format!("{}={}", key, value);
    let pattern = Regex::new(&format!(r"(?m)^{}=[^\r\n]*", regex::escape(key)))
        .with_context(|| format!("Invalid env key: {}", key))?;

    if pattern.is_match(content) {
        return Ok(pattern.replacen(content, 1, NoExpand(&line)).into_owned());
    }

    let trimmed = content.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        Ok(format!("{}\n", line))
    } else {
        Ok(format!("{}\n{}\n", trimmed, line))
    }
}

/// Make sure the env file exists and carries the host ids
///
/// Returns the ids written, or `None` when there is neither an env file nor
/// a template to copy it from.
pub fn configure_environment<P: Prompter>(
    prompter: &mut P,
    root: &Path,
    env_file: &str,
    env_template: &str,
    detected: HostIds,
) -> Result<Option<HostIds>> {
    let env_path = root.join(env_file);
    let template_path = root.join(env_template);

    if !env_path.exists() && template_path.exists() {
        std::fs::copy(&template_path, &env_path).map_err(|source| SetupError::EnvCopy {
            from: template_path.clone(),
            to: env_path.clone(),
            source,
        })?;
        prompter.info(&format!("Created {} from {}", env_file, env_template))?;
    }

    if !env_path.exists() {
        prompter.warning(&format!(
            "{} file not found, skipping environment configuration.",
            env_file
        ))?;
        return Ok(None);
    }

    let auto_detect = prompter.confirm(
        &format!("Auto-detect your UID and GID for {}/{}?", USER_KEY, GROUP_KEY),
        true,
    )?;

    let ids = if auto_detect {
        detected
    } else {
        HostIds {
            uid: prompter.input_number("Enter your user ID (UID)", detected.uid)?,
            gid: prompter.input_number("Enter your group ID (GID)", detected.gid)?,
        }
    };

    let content = std::fs::read_to_string(&env_path).map_err(|source| SetupError::EnvRead {
        path: env_path.clone(),
        source,
    })?;

    let content = replace_or_append(&content, USER_KEY, &ids.uid.to_string())?;
    let content = replace_or_append(&content, GROUP_KEY, &ids.gid.to_string())?;

    std::fs::write(&env_path, content)
        .map_err(|source| SetupError::EnvWrite {
            path: env_path.clone(),
            source,
        })
        .with_context(|| format!("Could not update {}", env_file))?;

    prompter.success(&format!(
        "Updated {} with {}={} and {}={}",
        env_file, USER_KEY, ids.uid, GROUP_KEY, ids.gid
    ))?;

    Ok(Some(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Answer, ScriptedPrompter};

    const DETECTED: HostIds = HostIds { uid: 501, gid: 20 };

    #[test]
    fn test_replace_existing_line() {
        let content = "APP_NAME=Laravel\nWWWUSER=1000\nWWWGROUP=1000\n";
        assert_eq!(
            replace_or_append(content, "WWWUSER", "501").unwrap(),
            "APP_NAME=Laravel\nWWWUSER=501\nWWWGROUP=1000\n"
        );
    }

    #[test]
    fn test_replace_only_first_match() {
        let content = "WWWUSER=1\nWWWUSER=2\n";
        assert_eq!(
            replace_or_append(content, "WWWUSER", "3").unwrap(),
            "WWWUSER=3\nWWWUSER=2\n"
        );
    }

    #[test]
    fn test_key_must_start_the_line() {
        let content = "OLD_WWWUSER=1\n# WWWUSER=2\n";
        assert_eq!(
            replace_or_append(content, "WWWUSER", "3").unwrap(),
            "OLD_WWWUSER=1\n# WWWUSER=2\nWWWUSER=3\n"
        );
    }

    #[test]
    fn test_prefix_key_not_matched() {
        let content = "WWWUSERNAME=bob\n";
        assert_eq!(
            replace_or_append(content, "WWWUSER", "3").unwrap(),
            "WWWUSERNAME=bob\nWWWUSER=3\n"
        );
    }

    #[test]
    fn test_append_normalises_trailing_newlines() {
        assert_eq!(
            replace_or_append("APP_ENV=local", "WWWGROUP", "20").unwrap(),
            "APP_ENV=local\nWWWGROUP=20\n"
        );
        assert_eq!(
            replace_or_append("APP_ENV=local\n\n\n", "WWWGROUP", "20").unwrap(),
            "APP_ENV=local\nWWWGROUP=20\n"
        );
    }

    #[test]
    fn test_append_to_empty_file() {
        assert_eq!(replace_or_append("", "WWWUSER", "1").unwrap(), "WWWUSER=1\n");
    }

    #[test]
    fn test_crlf_line_ending_preserved() {
        let content = "WWWUSER=1000\r\nAPP_KEY=\r\n";
        assert_eq!(
            replace_or_append(content, "WWWUSER", "1").unwrap(),
            "WWWUSER=1\r\nAPP_KEY=\r\n"
        );
    }

    #[test]
    fn test_key_metacharacters_are_literal() {
        assert_eq!(
            replace_or_append("AxB=2\nA.B=1\n", "A.B", "3").unwrap(),
            "AxB=2\nA.B=3\n"
        );
    }

    #[test]
    fn test_dollar_in_value_is_literal() {
        assert_eq!(
            replace_or_append("WWWUSER=1\n", "WWWUSER", "$1").unwrap(),
            "WWWUSER=$1\n"
        );
    }

    #[test]
    fn test_replace_or_append_is_idempotent() {
        for content in ["", "APP_ENV=local", "WWWUSER=7\nA=b\n", "A=b\n\n"] {
            let once = replace_or_append(content, "WWWUSER", "1001").unwrap();
            let twice = replace_or_append(&once, "WWWUSER", "1001").unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_copies_template_and_uses_typed_ids() {
        let dir = tempfile::tempdir().unwrap();
        let template = "APP_NAME=Laravel\n# comment\nDB_HOST=mysql\n";
        std::fs::write(dir.path().join(".env.example"), template).unwrap();

        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Confirm(false),
            Answer::Number(1001),
            Answer::Number(1001),
        ]);

        let ids = configure_environment(&mut prompter, dir.path(), ".env", ".env.example", DETECTED)
            .unwrap();
        assert_eq!(ids, Some(HostIds { uid: 1001, gid: 1001 }));

        let written = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert_eq!(
            written,
            "APP_NAME=Laravel\n# comment\nDB_HOST=mysql\nWWWUSER=1001\nWWWGROUP=1001\n"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".env.example")).unwrap(),
            template
        );
    }

    #[test]
    fn test_auto_detect_uses_detected_ids() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "WWWGROUP=1000\nWWWUSER=1000\n").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);
        configure_environment(&mut prompter, dir.path(), ".env", ".env.example", DETECTED)
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert_eq!(written, "WWWGROUP=20\nWWWUSER=501\n");
        assert!(!dir.path().join(".env.example").exists());
    }

    #[test]
    fn test_existing_env_not_overwritten_by_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "APP_ENV=production\n").unwrap();
        std::fs::write(dir.path().join(".env.example"), "APP_ENV=local\n").unwrap();

        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);
        configure_environment(&mut prompter, dir.path(), ".env", ".env.example", DETECTED)
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert!(written.starts_with("APP_ENV=production\n"));
    }

    #[test]
    fn test_missing_files_skip_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter = ScriptedPrompter::new(vec![]);

        let ids = configure_environment(&mut prompter, dir.path(), ".env", ".env.example", DETECTED)
            .unwrap();

        assert_eq!(ids, None);
        assert!(prompter.asked.is_empty());
        assert!(prompter.logged("skipping environment configuration"));
        assert!(!dir.path().join(".env").exists());
    }
}
