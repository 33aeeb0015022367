use url::Url;

use crate::github::{GithubRepoName, GithubUser, IssueNumber};

#[derive(Debug)]
pub enum MarvinEvent {
    /// A comment was posted on an issue or a pull request.
    Comment(IssueComment),
}

/// A comment posted on an issue, together with a snapshot of the issue it was
/// posted on. Created once per webhook delivery and never mutated.
#[derive(Debug)]
pub struct IssueComment {
    pub repository: GithubRepoName,
    pub author: GithubUser,
    pub issue: IssueSnapshot,
    pub text: String,
}

/// View of an issue at the time a comment arrived.
///
/// The label set on the real issue is the authoritative store; this snapshot
/// is only valid for the event it was delivered with.
#[derive(Clone, Debug)]
pub struct IssueSnapshot {
    pub number: IssueNumber,
    pub html_url: Url,
    pub author: GithubUser,
    /// Raw names of the labels currently attached to the issue.
    pub labels: Vec<String>,
}
