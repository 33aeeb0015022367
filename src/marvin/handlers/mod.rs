use std::sync::Arc;

use anyhow::Context;
use tracing::Instrument;

use crate::marvin::event::MarvinEvent;
use crate::marvin::handlers::status::update_status;
use crate::marvin::{IssueClient, MarvinContext};

pub mod status;

/// This function executes a single event received from the webhook layer.
pub async fn handle_marvin_event<Client: IssueClient>(
    event: MarvinEvent,
    ctx: Arc<MarvinContext<Client>>,
) -> anyhow::Result<()> {
    match event {
        MarvinEvent::Comment(comment) => {
            // We want to ignore comments made by this bot
            if ctx.client.is_comment_internal(&comment) {
                tracing::trace!("Ignoring comment {comment:?} because it was authored by this bot");
                return Ok(());
            }
            // Issues opt into status management by carrying the marker label
            if !comment
                .issue
                .labels
                .iter()
                .any(|name| name == &ctx.config.marker_label)
            {
                tracing::trace!(
                    "Ignoring comment on {} because the issue lacks the `{}` label",
                    comment.issue.html_url,
                    ctx.config.marker_label
                );
                return Ok(());
            }

            let span = tracing::info_span!(
                "Comment",
                issue = format!("{}#{}", comment.repository, comment.issue.number),
                author = comment.author.username
            );
            update_status(&ctx.client, &ctx.parser, comment)
                .instrument(span)
                .await
                .context("Cannot update issue status")?;
        }
    }
    Ok(())
}
