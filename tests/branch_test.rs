//! Integration tests for issue-URL branch derivation.

use gitai::error::BranchError;
use gitai::{IssueReference, derive_branch_name};

#[test]
fn test_issue_url_to_branch_name() {
    let cases = [
        ("https://example.com/org/my-cool-repo/issues/42", "issues/my-cool-repo-42"),
        ("https://github.com/tokio-rs/tokio/issues/5678", "issues/tokio-5678"),
        ("https://github.com/serde-rs/json/pull/1000", "pull/json-1000"),
        ("https://github.com/acme/web.app/issues/1", "issues/web-app-1"),
        ("https://github.com/acme/widgets/issues/007", "issues/widgets-007"),
    ];

    for (url, expected) in cases {
        assert_eq!(derive_branch_name(url).unwrap(), expected, "for {url}");
    }
}

#[test]
fn test_non_numeric_number_is_invalid_url() {
    let err = derive_branch_name("https://example.com/org/repo/pull/notanumber").unwrap_err();
    match err {
        BranchError::InvalidUrl { url, .. } => {
            assert_eq!(url, "https://example.com/org/repo/pull/notanumber");
        }
    }
}

#[test]
fn test_rejected_inputs() {
    let rejected = [
        "",
        "github.com/acme/widgets/issues/3",
        "https://github.com/acme/widgets",
        "https://github.com/acme/widgets/issues/",
        "https://github.com/acme/widgets/issues/12abc",
        "https://github.com/acme/widgets/issues/0",
    ];

    for url in rejected {
        assert!(derive_branch_name(url).is_err(), "expected {url:?} to be rejected");
    }
}

#[test]
fn test_issue_reference_round_trips_to_branch() {
    let issue = IssueReference::parse("https://github.com/acme/data_pipeline/issues/314").unwrap();
    assert_eq!(issue.owner, "acme");
    assert_eq!(issue.repo, "data_pipeline");
    assert_eq!(issue.kind, "issues");
    assert_eq!(issue.number, "314");
    assert_eq!(issue.branch_name(), "issues/data-pipeline-314");
}
