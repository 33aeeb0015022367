use std::fmt::{Display, Formatter};

/// A review-status label managed by the bot.
///
/// The statuses are mutually exclusive: at most one of them may be attached
/// to an issue at any time. Labels outside of this set (for example the
/// opt-in marker label) are never touched by the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLabel {
    /// The pull request is waiting for a review.
    AwaitingReviewer,
    /// A reviewer has requested changes from the author.
    AwaitingChanges,
    /// The pull request was reviewed and needs someone with merge rights.
    NeedsMerger,
}

impl StatusLabel {
    pub const ALL: [StatusLabel; 3] = [
        StatusLabel::AwaitingReviewer,
        StatusLabel::AwaitingChanges,
        StatusLabel::NeedsMerger,
    ];

    /// Name of the label as it appears on GitHub.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::AwaitingReviewer => "awaiting_reviewer",
            StatusLabel::AwaitingChanges => "awaiting_changes",
            StatusLabel::NeedsMerger => "needs_merger",
        }
    }

    /// Resolves a GitHub label name to a status label.
    /// The match is exact; unknown names are not an error, they are simply
    /// not status labels.
    pub fn from_name(name: &str) -> Option<StatusLabel> {
        StatusLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == name)
    }
}

impl Display for StatusLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
