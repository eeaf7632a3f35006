//! Error types for gitai modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the AI request pipeline.
///
/// Only [`AiError::UnsupportedModel`] is fatal to an operation; every other
/// variant is recovered by the dispatcher and turned into a fallback value.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Unsupported model '{0}'. Run 'gitai configure' to pick a supported model.")]
    UnsupportedModel(String),

    #[error("Request to {provider} failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned a body that is not valid JSON: {source}")]
    InvalidResponseBody {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} returned an unexpected response shape: {detail}")]
    UnexpectedShape {
        provider: &'static str,
        detail: String,
    },

    #[error("{provider} returned an empty message")]
    EmptyResponse { provider: &'static str },
}

impl AiError {
    /// Whether this error must be surfaced instead of falling back.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AiError::UnsupportedModel(_))
    }
}

/// Errors from issue URL parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BranchError {
    #[error("Invalid issue URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors from the on-disk credential store.
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from git operations (both git2 reads and `git` subprocess writes).
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to collect staged diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("No staged changes found. Stage your changes first.")]
    NoStagedChanges,

    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed with {}", code.map_or("unknown status".to_string(), |c| format!("exit code {c}")))]
    CommandFailed {
        operation: String,
        code: Option<i32>,
    },

    #[error("Failed to write commit message file: {0}")]
    TempFile(#[source] std::io::Error),
}
