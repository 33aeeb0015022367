use axum::async_trait;

use crate::config::MarvinConfig;
use crate::github::{GithubRepoName, IssueNumber};
use crate::marvin::event::IssueComment;

pub mod command;
pub mod event;
mod handlers;
pub mod labels;

pub use command::CommandParser;
pub use handlers::handle_marvin_event;
pub use handlers::status::{compute_transition, LabelDelta};

/// Provides functionality for working with issue labels of a remote
/// repository.
/// It is behind a trait to allow easier mocking in tests.
#[async_trait]
pub trait IssueClient: Send + Sync {
    /// Was the comment posted by the bot itself?
    fn is_comment_internal(&self, comment: &IssueComment) -> bool;

    /// Add a set of labels to an issue.
    async fn add_labels(
        &self,
        repo: &GithubRepoName,
        issue: IssueNumber,
        labels: &[String],
    ) -> anyhow::Result<()>;

    /// Remove a set of labels from an issue.
    /// Removing a label that is not present on the issue is a no-op.
    async fn remove_labels(
        &self,
        repo: &GithubRepoName,
        issue: IssueNumber,
        labels: &[String],
    ) -> anyhow::Result<()>;
}

///Stores data needed by the bot to handle events.
pub struct MarvinContext<Client: IssueClient> {
    pub client: Client,
    pub parser: CommandParser,
    pub config: MarvinConfig,
}

impl<Client: IssueClient> MarvinContext<Client> {
    pub fn new(client: Client, config: MarvinConfig) -> Self {
        Self {
            client,
            parser: CommandParser::default(),
            config,
        }
    }
}
