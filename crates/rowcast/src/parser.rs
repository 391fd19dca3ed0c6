//! Streaming parser assembling records from delimited lines.

use std::io::BufRead;

use crate::error::Result;
use crate::fields::Fields;
use crate::reader::LineReader;
use crate::record::Record;

/// Incrementally reads delimited rows from an input.
pub struct Parser<R> {
    source: LineReader<R>,
    delimiter: char,
}

impl<R: BufRead> Parser<R> {
    /// Parser reading from `input`, splitting fields at `delimiter`.
    pub fn new(input: R, delimiter: char) -> Self {
        Self {
            source: LineReader::new(input),
            delimiter,
        }
    }

    /// Skip blank lines and, when `comment` is set, lines starting with it.
    pub fn skip_comment(&mut self, comment: Option<char>) -> Result<()> {
        loop {
            let skip = match self.source.peek()? {
                Some(line) => {
                    line.is_empty() || comment.is_some_and(|prefix| line.starts_with(prefix))
                }
                None => false,
            };
            if !skip {
                return Ok(());
            }
            self.source.consume()?;
            tracing::trace!(line = self.source.line_number(), "skipped line");
        }
    }

    /// Parse the next line as raw text fields, appended to `fields`.
    /// Returns false on clean end of input, leaving `fields` untouched.
    pub fn parse_fields(&mut self, fields: &mut Vec<String>) -> Result<bool> {
        if self.source.consume()?.is_none() {
            return Ok(false);
        }
        let line = self.source.current();
        fields.extend(Fields::new(line, self.delimiter).map(str::to_string));
        Ok(true)
    }

    /// Parse the next line as one record of type `T`.
    ///
    /// The line must split into exactly `T::FIELD_COUNT` tokens. On failure
    /// the error is stamped with the line's verbatim text and 1-based number
    /// before it propagates. `Ok(None)` on clean end of input.
    pub fn parse_record<T: Record>(&mut self) -> Result<Option<T>> {
        if self.source.consume()?.is_none() {
            return Ok(None);
        }
        let line = self.source.current();
        let line_number = self.source.line_number();
        let mut fields = Fields::new(line, self.delimiter);
        let record = T::from_fields(&mut fields)
            .and_then(|record| fields.finish().map(|()| record))
            .map_err(|error| error.at_line(line, line_number))?;
        Ok(Some(record))
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// The line most recently read, for stamping errors raised after the
    /// fact.
    pub(crate) fn current_line(&self) -> &str {
        self.source.current()
    }
}
