//! Mutating git operations.
//!
//! These shell out to the system `git` binary so the user's config, hooks
//! and credential helpers apply. Output is inherited so git reports
//! directly to the terminal.

use std::io::Write;
use std::process::{Command, ExitStatus};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::GitError;

/// Check that a `git` executable is on `PATH`.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// `git add .`
pub fn stage_all() -> Result<(), GitError> {
    run_git(&["add", "."], "add")
}

/// `git commit -m <message>`
pub fn commit_with_message(message: &str) -> Result<(), GitError> {
    run_git(&["commit", "-m", message], "commit")
}

/// Commit using a message file, for messages that span several lines.
///
/// The file is removed once git exits.
pub fn commit_with_message_file(message: &str) -> Result<(), GitError> {
    let mut file = NamedTempFile::new().map_err(GitError::TempFile)?;
    file.write_all(message.as_bytes()).map_err(GitError::TempFile)?;
    file.flush().map_err(GitError::TempFile)?;

    let path = file.path().to_string_lossy().to_string();
    run_git(&["commit", "-F", &path], "commit")
}

/// `git checkout -b <branch>`
pub fn checkout_new_branch(branch: &str) -> Result<(), GitError> {
    run_git(&["checkout", "-b", branch], "checkout")
}

/// Forward arguments to git unchanged and return its exit code.
pub fn passthrough(args: &[String]) -> Result<i32, GitError> {
    let operation = args.first().cloned().unwrap_or_default();
    let status = spawn_git(args, &operation)?;
    // Killed by a signal: report a generic failure.
    Ok(status.code().unwrap_or(1))
}

fn spawn_git<S: AsRef<std::ffi::OsStr>>(args: &[S], operation: &str) -> Result<ExitStatus, GitError> {
    debug!("Running git {operation}");
    Command::new("git")
        .args(args)
        .status()
        .map_err(|source| GitError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })
}

/// Run a git command, failing on a non-zero exit.
fn run_git(args: &[&str], operation: &str) -> Result<(), GitError> {
    let status = spawn_git(args, operation)?;
    if !status.success() {
        return Err(GitError::CommandFailed {
            operation: operation.to_string(),
            code: status.code(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_is_installed() {
        assert!(check_git_installed().is_ok());
    }

    #[test]
    fn test_run_git_version_succeeds() {
        assert!(run_git(&["--version"], "version").is_ok());
    }

    #[test]
    fn test_run_git_invalid_command_fails() {
        let err = run_git(&["not-a-real-command"], "invalid").unwrap_err();
        match err {
            GitError::CommandFailed { operation, code } => {
                assert_eq!(operation, "invalid");
                assert_ne!(code, Some(0));
            }
            other => panic!("Expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_passthrough_returns_exit_code() {
        assert_eq!(passthrough(&["--version".to_string()]).unwrap(), 0);
        assert_ne!(passthrough(&["not-a-real-command".to_string()]).unwrap(), 0);
    }

    #[test]
    fn test_command_failed_message() {
        let err = GitError::CommandFailed {
            operation: "commit".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "git commit failed with exit code 1");
    }
}
