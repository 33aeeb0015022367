use anyhow::Context;
use axum::async_trait;
use octocrab::models::UserId;
use octocrab::{Error, Octocrab};

use crate::github::{GithubRepoName, IssueNumber};
use crate::marvin::event::IssueComment;
use crate::marvin::IssueClient;

/// Performs label operations on issues using the GitHub REST API.
pub struct GithubIssueClient {
    client: Octocrab,
    /// Id of the user account the bot acts as, used to recognize the bot's
    /// own comments.
    bot_id: UserId,
}

impl GithubIssueClient {
    /// Resolves the identity of the authenticated user and creates the client.
    pub async fn load(client: Octocrab) -> anyhow::Result<Self> {
        let user = client
            .current()
            .user()
            .await
            .context("Could not load the bot user account")?;
        tracing::info!("Authenticated as {}", user.login);
        Ok(Self {
            client,
            bot_id: user.id,
        })
    }
}

#[async_trait]
impl IssueClient for GithubIssueClient {
    fn is_comment_internal(&self, comment: &IssueComment) -> bool {
        comment.author.id == self.bot_id
    }

    async fn add_labels(
        &self,
        repo: &GithubRepoName,
        issue: IssueNumber,
        labels: &[String],
    ) -> anyhow::Result<()> {
        let client = self.client.issues(repo.owner(), repo.name());
        if !labels.is_empty() {
            client
                .add_labels(issue.0, labels)
                .await
                .context("Cannot add label(s) to issue")?;
        }

        Ok(())
    }

    async fn remove_labels(
        &self,
        repo: &GithubRepoName,
        issue: IssueNumber,
        labels: &[String],
    ) -> anyhow::Result<()> {
        let client = self.client.issues(repo.owner(), repo.name());
        // The GitHub API only allows removing labels one by one, so we remove
        // all of them in parallel to speed it up a little.
        let labels_to_remove_futures = labels
            .iter()
            .map(|label| client.remove_label(issue.0, label));
        futures::future::join_all(labels_to_remove_futures)
            .await
            .into_iter()
            .filter(|result| match result {
                Ok(_) => false,
                Err(error) => match error {
                    // This error is returned if we try to remove a label that does not exist on
                    // the issue. This should be a no-op, rather than an error, therefore we
                    // swallow this error.
                    Error::GitHub { source, .. }
                        if source.message.contains("Label does not exist") =>
                    {
                        tracing::trace!(
                            "Trying to remove label which does not exist on issue {issue}"
                        );
                        false
                    }
                    _ => true,
                },
            })
            .collect::<Result<Vec<_>, _>>()
            .context("Cannot remove label(s) from issue")?;

        Ok(())
    }
}
