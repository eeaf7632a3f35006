//! Routing for `gitai checkout`.
//!
//! The arguments arrive unparsed so that everything git understands,
//! including `--` and flags gitai does not know, reaches `git checkout`
//! exactly as typed.

/// What a `gitai checkout` invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutRequest {
    /// `-b` together with `-i <url>`: create a branch named after the issue.
    IssueBranch { issue_url: String },
    /// Anything else: run git with these arguments, `checkout` first.
    Passthrough(Vec<String>),
}

impl CheckoutRequest {
    /// Route the raw arguments that followed `checkout`.
    ///
    /// Only tokens before a `--` separator are inspected.
    pub fn from_args(args: &[String]) -> Self {
        let mut branch = false;
        let mut issue_url = None;

        let mut tokens = args.iter().take_while(|a| a.as_str() != "--");
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "-b" | "--branch" => branch = true,
                "-i" | "--issue" => issue_url = tokens.next().cloned(),
                other => {
                    if let Some(url) = other.strip_prefix("--issue=") {
                        issue_url = Some(url.to_string());
                    }
                }
            }
        }

        match (branch, issue_url) {
            (true, Some(issue_url)) => CheckoutRequest::IssueBranch { issue_url },
            _ => {
                let mut forwarded = Vec::with_capacity(args.len() + 1);
                forwarded.push("checkout".to_string());
                forwarded.extend(args.iter().cloned());
                CheckoutRequest::Passthrough(forwarded)
            }
        }
    }
}
