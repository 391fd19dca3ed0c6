//! Buffered line reading with one-line lookahead.

use std::io::BufRead;

use crate::error::{Error, Result, messages};

/// Reads lines one at a time with one line of lookahead.
///
/// The reader owns a single line buffer that is overwritten on every read,
/// so a returned line is only valid until the next call that reads.
pub struct LineReader<R> {
    input: R,
    line: String,
    line_number: usize,
    available: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap `input`, which should be positioned at the start of content.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_number: 0,
            available: false,
        }
    }

    /// The next line, consuming it. `None` on clean end of input.
    pub fn consume(&mut self) -> Result<Option<&str>> {
        if !self.fill()? {
            return Ok(None);
        }
        self.available = false;
        self.line_number += 1;
        Ok(Some(&self.line))
    }

    /// The next line without consuming it; repeated peeks see the same line.
    pub fn peek(&mut self) -> Result<Option<&str>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(Some(&self.line))
    }

    /// 1-based number of the last consumed line; peeking does not advance
    /// it. Zero before the first line is consumed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Contents of the most recently read line.
    pub(crate) fn current(&self) -> &str {
        &self.line
    }

    /// Ensure the buffer holds the next unconsumed line. False at end of
    /// input.
    fn fill(&mut self) -> Result<bool> {
        if self.available {
            return Ok(true);
        }
        self.line.clear();
        let count = self
            .input
            .read_line(&mut self.line)
            .map_err(|error| Error::io(format!("{}: {error}", messages::INPUT_ERROR)))?;
        if count == 0 {
            return Ok(false);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        self.available = true;
        Ok(true)
    }
}
