//! Options controlling how delimited text is read.

use serde::{Deserialize, Serialize};

/// Options for loading delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Character separating fields within a line.
    /// Defaults to tab.
    pub delimiter: char,

    /// Whether the first content line is a header to skip.
    /// Defaults to true.
    pub header: bool,

    /// Prefix marking whole lines as comments to skip. Blank lines are
    /// always skipped, with or without a comment prefix.
    /// Defaults to None.
    pub comment: Option<char>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            header: true,
            comment: None,
        }
    }
}

impl Options {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable the header line.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set the comment prefix (None disables comment skipping).
    pub fn with_comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }
}
