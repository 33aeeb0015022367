use chrono::Utc;
use serde::Serialize;
use url::Url;

use super::repository::{default_repository, GitHubRepository};
use super::user::{default_github_user, GitHubUser};

/// Builds the JSON body of an `issue_comment` webhook delivery.
pub(crate) struct CommentPayload {
    action: String,
    body: String,
    issue_author: GitHubUser,
    commenter: Option<GitHubUser>,
    labels: Vec<String>,
    pull_request: bool,
}

pub(crate) fn comment_payload(body: &str) -> CommentPayload {
    CommentPayload {
        action: "created".to_string(),
        body: body.to_string(),
        issue_author: default_github_user(),
        commenter: None,
        labels: vec!["marvin".to_string()],
        pull_request: true,
    }
}

impl CommentPayload {
    pub(crate) fn action(mut self, action: &str) -> Self {
        self.action = action.to_string();
        self
    }

    /// Sets the comment author. Without this, the comment is authored by the
    /// issue author.
    pub(crate) fn commenter(mut self, login: &str, id: u64) -> Self {
        self.commenter = Some(GitHubUser::new(login, id));
        self
    }

    pub(crate) fn labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|name| name.to_string()).collect();
        self
    }

    pub(crate) fn pull_request(mut self, pull_request: bool) -> Self {
        self.pull_request = pull_request;
        self
    }

    pub(crate) fn serialize(self) -> String {
        let time = Utc::now();
        let url: Url = "https://foo.bar".parse().unwrap();
        let commenter = self
            .commenter
            .unwrap_or_else(|| self.issue_author.clone());

        let payload = GitHubIssueCommentEventPayload {
            repository: default_repository(),
            action: self.action,
            issue: GitHubIssue {
                id: 1,
                node_id: "1".to_string(),
                url: url.clone(),
                repository_url: url.clone(),
                labels_url: url.clone(),
                comments_url: url.clone(),
                events_url: url.clone(),
                html_url: url.clone(),
                number: 1,
                state: "open".to_string(),
                title: "Test issue".to_string(),
                body: None,
                user: self.issue_author,
                labels: self
                    .labels
                    .into_iter()
                    .enumerate()
                    .map(|(id, name)| GitHubLabel::new(id as u64, name))
                    .collect(),
                assignees: vec![],
                author_association: "".to_string(),
                locked: false,
                comments: 0,
                pull_request: self.pull_request.then(|| GitHubPullRequestLink {
                    url: url.clone(),
                    html_url: url.clone(),
                    diff_url: url.clone(),
                    patch_url: url.clone(),
                }),
                created_at: time,
                updated_at: time,
            },
            comment: GitHubComment {
                id: 1,
                node_id: "1".to_string(),
                url: url.clone(),
                html_url: url,
                body: Some(self.body.clone()),
                body_text: Some(self.body.clone()),
                body_html: Some(self.body),
                user: commenter,
                created_at: time,
            },
        };
        serde_json::to_string(&payload).unwrap()
    }
}

// The following structs mirror the octocrab payload types, which are
// #[non_exhaustive] and therefore cannot be constructed directly.
#[derive(Serialize)]
struct GitHubIssueCommentEventPayload {
    repository: GitHubRepository,
    action: String,
    issue: GitHubIssue,
    comment: GitHubComment,
}

#[derive(Serialize)]
struct GitHubIssue {
    id: u64,
    node_id: String,
    url: Url,
    repository_url: Url,
    labels_url: Url,
    comments_url: Url,
    events_url: Url,
    html_url: Url,
    number: u64,
    state: String,
    title: String,
    body: Option<String>,
    user: GitHubUser,
    labels: Vec<GitHubLabel>,
    assignees: Vec<GitHubUser>,
    author_association: String,
    locked: bool,
    comments: u32,
    pull_request: Option<GitHubPullRequestLink>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
struct GitHubComment {
    id: u64,
    node_id: String,
    url: Url,
    html_url: Url,
    body: Option<String>,
    body_text: Option<String>,
    body_html: Option<String>,
    user: GitHubUser,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
struct GitHubPullRequestLink {
    url: Url,
    html_url: Url,
    diff_url: Url,
    patch_url: Url,
}

#[derive(Serialize)]
struct GitHubLabel {
    id: u64,
    node_id: String,
    url: Url,
    name: String,
    color: String,
    default: bool,
}

impl GitHubLabel {
    fn new(id: u64, name: String) -> Self {
        Self {
            id,
            node_id: format!("label-{id}"),
            url: format!("https://api.github.com/repos/NixOS/nixpkgs/labels/{name}")
                .parse()
                .unwrap(),
            name,
            color: "ededed".to_string(),
            default: false,
        }
    }
}
