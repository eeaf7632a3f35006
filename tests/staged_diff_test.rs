//! Integration tests for staged diff collection.

mod common;

use common::TestRepo;
use gitai::error::GitError;
use gitai::git::{FileStatus, collect_staged_diff};

#[test]
fn test_fresh_repo_with_nothing_staged() {
    let repo = TestRepo::new();
    let result = collect_staged_diff(&repo.repo);
    assert!(matches!(result, Err(GitError::NoStagedChanges)));
}

#[test]
fn test_first_commit_diffs_against_empty_tree() {
    let repo = TestRepo::new();
    repo.stage("README.md", "# Project\n");

    let diff = collect_staged_diff(&repo.repo).unwrap();
    assert_eq!(diff.files.len(), 1);
    assert_eq!(diff.files[0].status, FileStatus::Added);
    assert!(diff.text.contains("+# Project"));
}

#[test]
fn test_only_index_changes_are_reported() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "one\n");
    repo.stage("b.txt", "two\n");
    repo.commit("initial");

    repo.stage("a.txt", "one\nmore\n");
    repo.write("b.txt", "changed but not staged\n");
    repo.write("c.txt", "untracked\n");

    let diff = collect_staged_diff(&repo.repo).unwrap();
    let paths: Vec<&str> = diff.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["a.txt"]);
    assert_eq!(diff.additions, 1);
    assert_eq!(diff.deletions, 0);
    assert!(!diff.text.contains("changed but not staged"));
}

#[test]
fn test_staged_deletion() {
    let repo = TestRepo::new();
    repo.stage("old.txt", "legacy\ncode\n");
    repo.commit("initial");

    repo.stage_removal("old.txt");

    let diff = collect_staged_diff(&repo.repo).unwrap();
    assert_eq!(diff.files.len(), 1);
    assert_eq!(diff.files[0].path, "old.txt");
    assert_eq!(diff.files[0].status, FileStatus::Deleted);
    assert_eq!(diff.deletions, 2);
}

#[test]
fn test_large_diff_is_not_truncated() {
    let repo = TestRepo::new();
    repo.stage("seed.txt", "seed\n");
    repo.commit("initial");

    let content: String = (0..5000).map(|i| format!("line {i}\n")).collect();
    repo.stage("big.txt", &content);

    let diff = collect_staged_diff(&repo.repo).unwrap();
    assert_eq!(diff.additions, 5000);
    assert!(diff.text.contains("+line 4999"));
}
