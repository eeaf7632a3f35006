//! Branch names derived from issue-tracker URLs.
//!
//! `https://github.com/org/my-repo/issues/42` becomes `issues/my-repo-42`.

use url::Url;

use crate::error::BranchError;

/// Minimum path segments: owner, repo, issue kind, issue number.
const MIN_PATH_SEGMENTS: usize = 4;

/// An issue or pull request parsed from its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReference {
    pub owner: String,
    pub repo: String,
    /// Second-to-last path segment, e.g. `issues` or `pull`.
    pub kind: String,
    /// Issue number as written in the URL, leading zeros included.
    pub number: String,
}

impl IssueReference {
    /// Parse an issue URL.
    ///
    /// The last path segment must be a positive integer that fits in a
    /// `u64`, written with ASCII digits only. It is kept verbatim.
    pub fn parse(issue_url: &str) -> Result<Self, BranchError> {
        let invalid = |reason: &str| BranchError::InvalidUrl {
            url: issue_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(issue_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        let segments: Vec<&str> = url
            .path_segments()
            .ok_or_else(|| invalid("URL has no path"))?
            .collect();

        if segments.len() < MIN_PATH_SEGMENTS {
            return Err(invalid("expected <owner>/<repo>/<type>/<number> in the path"));
        }

        let number_segment = segments[segments.len() - 1];
        if number_segment.is_empty() || !number_segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("issue number is not numeric"));
        }
        let value: u64 = number_segment
            .parse()
            .map_err(|_| invalid("issue number is out of range"))?;
        if value == 0 {
            return Err(invalid("issue number must be positive"));
        }

        Ok(Self {
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            kind: segments[segments.len() - 2].to_string(),
            number: number_segment.to_string(),
        })
    }

    /// Branch name in the form `<kind>/<sanitized-repo>-<number>`.
    pub fn branch_name(&self) -> String {
        format!("{}/{}-{}", self.kind, sanitize_repo_name(&self.repo), self.number)
    }
}

/// Derive a branch name from an issue URL.
pub fn derive_branch_name(issue_url: &str) -> Result<String, BranchError> {
    IssueReference::parse(issue_url).map(|issue| issue.branch_name())
}

/// Replace every character outside `[A-Za-z0-9]` with a hyphen.
fn sanitize_repo_name(repo: &str) -> String {
    repo.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_issue() {
        assert_eq!(
            derive_branch_name("https://example.com/org/my-cool-repo/issues/42").unwrap(),
            "issues/my-cool-repo-42"
        );
    }

    #[test]
    fn test_pull_request() {
        assert_eq!(
            derive_branch_name("https://github.com/rust-lang/rust/pull/12345").unwrap(),
            "pull/rust-12345"
        );
    }

    #[test]
    fn test_non_numeric_issue_number() {
        let err = derive_branch_name("https://example.com/org/repo/pull/notanumber").unwrap_err();
        assert!(matches!(err, BranchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_fields() {
        let issue = IssueReference::parse("https://github.com/acme/widgets/issues/7").unwrap();
        assert_eq!(
            issue,
            IssueReference {
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
                kind: "issues".to_string(),
                number: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_repo_name_sanitized() {
        assert_eq!(
            derive_branch_name("https://github.com/acme/my_repo.rs/issues/3").unwrap(),
            "issues/my-repo-rs-3"
        );
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(
            derive_branch_name("https://github.com/acme/widgets/issues/9?foo=bar#issuecomment-1").unwrap(),
            "issues/widgets-9"
        );
    }

    #[test]
    fn test_gitlab_style_path() {
        assert_eq!(
            derive_branch_name("https://gitlab.com/group/project/-/issues/15").unwrap(),
            "issues/project-15"
        );
    }

    #[test]
    fn test_zero_padded_number_kept_verbatim() {
        assert_eq!(
            derive_branch_name("https://github.com/acme/widgets/issues/007").unwrap(),
            "issues/widgets-007"
        );
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/000").is_err());
    }

    #[test]
    fn test_trailing_slash_rejected() {
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/9/").is_err());
    }

    #[test]
    fn test_too_few_segments() {
        assert!(derive_branch_name("https://github.com/acme/42").is_err());
        assert!(derive_branch_name("https://github.com/").is_err());
    }

    #[test]
    fn test_not_a_url() {
        assert!(derive_branch_name("not a url").is_err());
        assert!(derive_branch_name("").is_err());
    }

    #[test]
    fn test_signed_or_decimal_numbers_rejected() {
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/-4").is_err());
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/+4").is_err());
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/4.0").is_err());
    }

    #[test]
    fn test_zero_and_overflow_rejected() {
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/0").is_err());
        assert!(derive_branch_name("https://github.com/acme/widgets/issues/99999999999999999999999").is_err());
    }

    #[test]
    fn test_error_message_includes_url() {
        let err = derive_branch_name("https://github.com/acme/widgets/issues/abc").unwrap_err();
        assert!(err.to_string().contains("https://github.com/acme/widgets/issues/abc"));
    }
}
