//! Prompt templates for the two commit-message tasks.

/// A single request to the AI provider.
///
/// Each task maps to one fixed template; the task text is substituted once,
/// verbatim, with no escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTask<'a> {
    /// Draft a commit message from a staged diff.
    GenerateCommitMessage { diff: &'a str },
    /// Polish a commit message written by the user.
    ImproveCommitMessage { message: &'a str },
}

impl PromptTask<'_> {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            PromptTask::GenerateCommitMessage { .. } => "generate",
            PromptTask::ImproveCommitMessage { .. } => "improve",
        }
    }

    /// Render the template for this task.
    pub fn render(&self) -> String {
        match self {
            PromptTask::GenerateCommitMessage { diff } => format!(
                "Generate a clear, concise git commit message in imperative mood \
                 (e.g., \"Fix bug\" not \"Fixed bug\") for these changes. \
                 Focus on what changed and why, not how. \
                 Use conventional commit style if appropriate.\n\n\
                 Git diff:\n{diff}\n\nCommit message:"
            ),
            PromptTask::ImproveCommitMessage { message } => format!(
                "Check and improve this git commit message for clarity, grammar, \
                 spelling, and conventional commit style. \
                 Return only the improved message:\n\n\"{message}\"\n\nImproved message:"
            ),
        }
    }
}
