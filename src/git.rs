//! Git command runner for lockwatch.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. The lock listing is the only git invocation
//! the watcher makes; it never mutates the repository.

use crate::error::{LockwatchError, Result};
use std::path::Path;
#[cfg(unix)]
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Command, ExitStatus, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(LockwatchError::ExternalCommand)` - If git could not be spawned,
///   exited non-zero, or was killed by a signal
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    run_program("git", cwd.as_ref(), args)
}

/// Run `program` detached from the terminal's process group.
///
/// Ctrl+C at the terminal is delivered to the whole foreground group; the
/// child gets its own group so only lockwatch sees the interrupt and the
/// in-flight listing runs to completion.
fn run_program(program: &str, cwd: &Path, args: &[&str]) -> Result<GitOutput> {
    let command_line = format!("{} {}", program, args.join(" "));

    let mut command = Command::new(program);
    command.current_dir(cwd).args(args);
    #[cfg(unix)]
    command.process_group(0);

    let output = command.output().map_err(|e| {
        LockwatchError::ExternalCommand(format!(
            "failed to execute {} in '{}': {}",
            command_line,
            cwd.display(),
            e
        ))
    })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(LockwatchError::ExternalCommand(format!(
            "{} failed ({}): {}",
            command_line,
            describe_status(&output.status),
            error_msg
        )))
    }
}

fn describe_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit code {}", code);
    }
    #[cfg(unix)]
    if let Some(signal) = status.signal() {
        return format!("killed by signal {}", signal);
    }
    "terminated abnormally".to_string()
}

/// List the repository's LFS locks as raw text.
///
/// Each line of the returned text describes one lock as
/// `<file>\t<owner>\t<id>`; an empty string means no locks are held.
pub fn lfs_locks<P: AsRef<Path>>(repo_dir: P) -> Result<String> {
    let output = run_git(repo_dir, &["lfs", "locks"])?;
    Ok(output.stdout)
}
