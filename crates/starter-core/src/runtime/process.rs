//! External command execution
//!
//! Commands run one at a time in the project root. Output is forwarded line
//! by line while the child runs; stderr is also captured so failures can be
//! reported afterwards.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Default time limit for a single command (10 minutes)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// How long to wait for exit once both output pipes have closed
const EXIT_GRACE: Duration = Duration::from_secs(5);

/// A fully-resolved command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Attach the child to the operator's terminal instead of piping output
    pub interactive: bool,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            interactive: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a command finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed {
        code: Option<i32>,
        /// Captured standard error (empty for interactive commands)
        stderr: String,
    },
    TimedOut(Duration),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Runs external commands
///
/// `Err` means the command could not be started or waited on at all.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&mut self, command: &CommandLine) -> Result<Outcome>;
}

/// Runs commands as child processes with a time limit
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn run_attached(&self, command: &CommandLine) -> Result<Outcome> {
        let mut child = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start: {}", command))?;

        match timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(Outcome::Success),
            Ok(Ok(status)) => Ok(Outcome::Failed {
                code: status.code(),
                stderr: String::new(),
            }),
            Ok(Err(e)) => Err(e).with_context(|| format!("Failed to wait for: {}", command)),
            Err(_) => {
                let _ = child.kill().await;
                Ok(Outcome::TimedOut(self.timeout))
            }
        }
    }

    async fn run_streamed(&self, command: &CommandLine) -> Result<Outcome> {
        let mut child = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start: {}", command))?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        // Split on raw bytes so undecodable output never stops the pipes draining
        let mut stdout_reader = BufReader::new(stdout).split(b'\n');
        let mut stderr_reader = BufReader::new(stderr).split(b'\n');
        let mut captured: Vec<String> = Vec::new();

        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_segment(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", decode_line(&line)),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_segment(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => {
                                let line = decode_line(&line);
                                eprintln!("  {}", line.dimmed());
                                captured.push(line);
                            }
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(self.timeout, output_task).await.is_err() {
            let _ = child.kill().await;
            return Ok(Outcome::TimedOut(self.timeout));
        }

        match timeout(EXIT_GRACE, child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(Outcome::Success),
            Ok(Ok(status)) => Ok(Outcome::Failed {
                code: status.code(),
                stderr: captured.join("\n"),
            }),
            Ok(Err(e)) => Err(e).with_context(|| format!("Failed to wait for: {}", command)),
            Err(_) => {
                let _ = child.kill().await;
                Ok(Outcome::TimedOut(self.timeout))
            }
        }
    }
}

/// Lossy UTF-8 decode of one output line, without its line ending
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

impl CommandRunner for ProcessRunner {
    async fn run(&mut self, command: &CommandLine) -> Result<Outcome> {
        if command.interactive {
            self.run_attached(command).await
        } else {
            self.run_streamed(command).await
        }
    }
}
