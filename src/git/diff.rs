//! Staged diff collection using git2.

use std::fmt;

use git2::{Delta, Diff, DiffFormat, ErrorCode, Repository, Tree};
use tracing::warn;

use crate::error::GitError;

/// Status of a staged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Added => write!(f, "Added"),
            FileStatus::Modified => write!(f, "Modified"),
            FileStatus::Deleted => write!(f, "Deleted"),
            FileStatus::Renamed => write!(f, "Renamed"),
        }
    }
}

/// A file with staged changes.
#[derive(Debug, Clone)]
pub struct ChangedFile {
    pub path: String,
    pub status: FileStatus,
}

/// Everything staged in the index relative to `HEAD`.
#[derive(Debug, Clone)]
pub struct StagedDiff {
    /// Unified patch text, equivalent to `git diff --staged`.
    pub text: String,
    pub files: Vec<ChangedFile>,
    pub additions: usize,
    pub deletions: usize,
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(GitError::DiffFailed(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::DiffFailed)?;
    Ok(Some(tree))
}

/// Open the repository containing the current directory.
pub fn open_current_repo() -> Result<Repository, GitError> {
    Repository::open_from_env().map_err(GitError::OpenRepository)
}

/// Collect the staged diff (index against `HEAD`).
///
/// Unstaged and untracked changes are ignored. Fails with
/// [`GitError::NoStagedChanges`] when the index matches `HEAD`.
pub fn collect_staged_diff(repo: &Repository) -> Result<StagedDiff, GitError> {
    let head_tree = resolve_head_tree(repo)?;

    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(GitError::DiffFailed)?;

    let files = collect_files(&diff);
    if files.is_empty() {
        return Err(GitError::NoStagedChanges);
    }

    let mut text = String::new();
    let mut additions = 0usize;
    let mut deletions = 0usize;

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        match origin {
            '+' => additions += 1,
            '-' => deletions += 1,
            _ => {}
        }

        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(|e| {
        warn!("Failed to print staged diff: {e}");
        GitError::DiffFailed(e)
    })?;

    Ok(StagedDiff {
        text,
        files,
        additions,
        deletions,
    })
}

/// Collect changed file entries from a diff.
fn collect_files(diff: &Diff<'_>) -> Vec<ChangedFile> {
    diff.deltas()
        .filter_map(|delta| {
            let status = match delta.status() {
                Delta::Added => FileStatus::Added,
                Delta::Deleted => FileStatus::Deleted,
                Delta::Renamed => FileStatus::Renamed,
                _ => FileStatus::Modified,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().to_string())?;

            Some(ChangedFile { path, status })
        })
        .collect()
}
