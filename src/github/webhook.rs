use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use octocrab::models::events::payload::{IssueCommentEventAction, IssueCommentEventPayload};
use octocrab::models::Repository;

use crate::github::server::ServerStateRef;
use crate::github::{GithubRepoName, GithubUser};
use crate::marvin::event::{IssueComment, IssueSnapshot, MarvinEvent};

const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// This struct is used to extract the repository from a GitHub webhook event.
/// The wrapper exists because octocrab doesn't expose/parse the repository field.
#[derive(serde::Deserialize, Debug)]
pub struct WebhookRepository {
    repository: Repository,
}

/// axum extractor for GitHub webhook events.
#[derive(Debug)]
pub struct GitHubWebhook(pub MarvinEvent);

/// Extracts a webhook event from a HTTP request.
#[async_trait]
impl FromRequest<ServerStateRef> for GitHubWebhook {
    type Rejection = StatusCode;

    async fn from_request(
        request: Request,
        _state: &ServerStateRef,
    ) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        // Eagerly load body
        let body: Bytes = axum::body::to_bytes(body, MAX_BODY_SIZE)
            .await
            .map_err(|error| {
                tracing::error!("Parsing webhook body failed: {error:?}");
                StatusCode::BAD_REQUEST
            })?;

        // Parse webhook content
        match parse_webhook_event(parts, &body) {
            Ok(Some(event)) => Ok(GitHubWebhook(event)),
            Ok(None) => Err(StatusCode::OK),
            Err(error) => {
                tracing::error!("Cannot parse webhook event: {error:?}");
                Err(StatusCode::BAD_REQUEST)
            }
        }
    }
}

fn parse_webhook_event(request: Parts, body: &[u8]) -> anyhow::Result<Option<MarvinEvent>> {
    let Some(event_type) = request.headers.get("x-github-event") else {
        return Err(anyhow::anyhow!("x-github-event header not found"));
    };

    match event_type.as_bytes() {
        b"issue_comment" => {
            let repository: WebhookRepository = serde_json::from_slice(body)?;
            let repository_name = parse_repository_name(&repository.repository)?;

            let event: IssueCommentEventPayload = serde_json::from_slice(body)?;
            Ok(parse_issue_comment(repository_name, event).map(MarvinEvent::Comment))
        }
        _ => {
            tracing::debug!("Ignoring unknown event type {:?}", event_type.to_str());
            Ok(None)
        }
    }
}

fn parse_issue_comment(
    repo: GithubRepoName,
    payload: IssueCommentEventPayload,
) -> Option<IssueComment> {
    // Edited and deleted comments are not interesting for the bot
    if !matches!(payload.action, IssueCommentEventAction::Created) {
        return None;
    }
    // We only care about comments on pull requests
    if payload.issue.pull_request.is_none() {
        tracing::debug!(
            "Ignoring comment on issue {} because it does not belong to a pull request",
            payload.issue.number
        );
        return None;
    }

    Some(IssueComment {
        repository: repo,
        author: GithubUser {
            id: payload.comment.user.id,
            username: payload.comment.user.login,
        },
        text: payload.comment.body.unwrap_or_default(),
        issue: IssueSnapshot {
            number: payload.issue.number.into(),
            html_url: payload.issue.html_url,
            author: GithubUser {
                id: payload.issue.user.id,
                username: payload.issue.user.login,
            },
            labels: payload
                .issue
                .labels
                .into_iter()
                .map(|label| label.name)
                .collect(),
        },
    })
}

fn parse_repository_name(repository: &Repository) -> anyhow::Result<GithubRepoName> {
    let repo_name = &repository.name;
    let Some(repo_owner) = repository.owner.as_ref().map(|user| &user.login) else {
        return Err(anyhow::anyhow!("Owner for repo {repo_name} is missing"));
    };
    Ok(GithubRepoName::new(repo_owner, repo_name))
}
