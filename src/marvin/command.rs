//! Defines the parser for status commands.

use crate::marvin::labels::StatusLabel;

/// Parses `/status <name>` commands from comment bodies.
pub struct CommandParser {
    prefix: String,
}

impl CommandParser {
    pub fn new(prefix: String) -> Self {
        Self { prefix }
    }

    /// Extracts a status transition command from the given comment text.
    ///
    /// Each line is considered separately. A line contains a command when its
    /// whitespace-trimmed content starts with the command prefix, followed by
    /// whitespace and the exact name of a status label; anything after the
    /// label name on the same line is ignored. Both the prefix and the label
    /// name are case-sensitive. Lines with an unknown label name are skipped,
    /// and the first recognized command wins.
    ///
    /// This function never fails; a body without a recognized command simply
    /// yields `None`.
    pub fn parse(&self, text: &str) -> Option<StatusLabel> {
        text.lines().find_map(|line| self.parse_line(line.trim()))
    }

    fn parse_line(&self, line: &str) -> Option<StatusLabel> {
        let rest = line.strip_prefix(&self.prefix)?;
        // Require a separator so that e.g. `/statusfoo bar` does not match.
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let name = rest.split_whitespace().next()?;
        StatusLabel::from_name(name)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new("/status".to_string())
    }
}
