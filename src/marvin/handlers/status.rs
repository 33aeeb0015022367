use crate::github::{GithubRepoName, IssueNumber};
use crate::marvin::command::CommandParser;
use crate::marvin::event::IssueComment;
use crate::marvin::labels::StatusLabel;
use crate::marvin::IssueClient;

/// Labels to add to and remove from an issue after a comment was handled.
///
/// Applying a delta leaves at most one status label on the issue, and
/// applying the same delta twice has the same effect as applying it once.
#[derive(Debug, Default, PartialEq)]
pub struct LabelDelta {
    pub add: Option<StatusLabel>,
    pub remove: Vec<StatusLabel>,
}

impl LabelDelta {
    pub fn is_empty(&self) -> bool {
        self.add.is_none() && self.remove.is_empty()
    }
}

/// Decides which status transition (if any) the given comment causes.
///
/// An explicit `/status <name>` command is honored only when it comes from
/// the issue author. A comment from anybody else forces the status to
/// `awaiting_changes`, whatever its content, until the author explicitly
/// reopens the issue for review. A comment from the author without a
/// recognized command changes nothing.
///
/// The computed delta adds the target status (issued even when the label is
/// already present, since the add is idempotent) and removes every other
/// status label currently attached to the issue. Labels outside of the status
/// set are left alone.
pub fn compute_transition(parser: &CommandParser, comment: &IssueComment) -> LabelDelta {
    let command = parser.parse(&comment.text);
    let is_author = comment.author.id == comment.issue.author.id;

    let target = match command {
        Some(label) if is_author => Some(label),
        // Any comment from a non-author requests changes, even one carrying
        // a command that was not honored.
        _ if !is_author => Some(StatusLabel::AwaitingChanges),
        _ => None,
    };
    let Some(target) = target else {
        return LabelDelta::default();
    };

    let remove = StatusLabel::ALL
        .into_iter()
        .filter(|label| *label != target)
        .filter(|label| {
            comment
                .issue
                .labels
                .iter()
                .any(|name| name == label.as_str())
        })
        .collect();

    LabelDelta {
        add: Some(target),
        remove,
    }
}

/// Runs the status state machine for the given comment and applies the
/// resulting label delta to the issue.
pub(super) async fn update_status<Client: IssueClient>(
    client: &Client,
    parser: &CommandParser,
    comment: IssueComment,
) -> anyhow::Result<()> {
    let delta = compute_transition(parser, &comment);
    if delta.is_empty() {
        tracing::debug!("Comment causes no status transition");
        return Ok(());
    }
    apply_delta(client, &comment.repository, comment.issue.number, delta).await
}

async fn apply_delta<Client: IssueClient>(
    client: &Client,
    repo: &GithubRepoName,
    issue: IssueNumber,
    delta: LabelDelta,
) -> anyhow::Result<()> {
    if let Some(label) = delta.add {
        tracing::info!("Adding label {label}");
        client
            .add_labels(repo, issue, &[label.to_string()])
            .await?;
    }
    if !delta.remove.is_empty() {
        tracing::info!("Removing label(s) {:?}", delta.remove);
        let labels: Vec<String> = delta
            .remove
            .iter()
            .map(|label| label.to_string())
            .collect();
        client.remove_labels(repo, issue, &labels).await?;
    }
    Ok(())
}
