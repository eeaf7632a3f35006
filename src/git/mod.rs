//! Git integration: staged diff via git2, mutations via the git binary.

pub mod checkout;
pub mod diff;
pub mod executor;

pub use checkout::CheckoutRequest;
pub use diff::{ChangedFile, FileStatus, StagedDiff, collect_staged_diff, open_current_repo};
pub use executor::{
    check_git_installed, checkout_new_branch, commit_with_message, commit_with_message_file,
    passthrough, stage_all,
};
