//! gitai - an AI-assisted git wrapper.
//!
//! # Overview
//!
//! gitai drafts commit messages from the staged diff, polishes commit
//! messages written by hand, and derives branch names from issue URLs.
//! Everything else is passed through to `git` unchanged.

pub mod ai;
pub mod branch;
pub mod config;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use ai::{AiClient, ProviderDescriptor, normalize};
pub use branch::{IssueReference, derive_branch_name};
pub use config::{CredentialStore, Credentials, HttpSettings};
pub use error::{AiError, BranchError, CredentialsError, GitError};
pub use git::StagedDiff;
