//! Incremental splitting of one line into field tokens.

use crate::convert::FromField;
use crate::error::{Error, Result, messages};

/// Splits one line into delimiter-separated tokens, one at a time, in
/// lockstep with conversion.
///
/// Every delimiter separates two tokens, so a trailing delimiter yields a
/// final empty token and `"\t\t"` yields three empty tokens. An empty line
/// yields no tokens at all.
pub struct Fields<'line> {
    // None = exhausted; Some("") = exactly one empty token pending.
    rest: Option<&'line str>,
    delimiter: char,
}

impl<'line> Fields<'line> {
    /// Start splitting `line` at `delimiter`.
    pub fn new(line: &'line str, delimiter: char) -> Self {
        Self {
            rest: if line.is_empty() { None } else { Some(line) },
            delimiter,
        }
    }

    /// Convert the next token, failing when the line has run out of tokens.
    pub fn next_field<T: FromField>(&mut self) -> Result<T> {
        let Some(token) = self.next() else {
            return Err(Error::format(messages::MISSING_FIELD));
        };
        T::from_field(token)
    }

    /// Check that every token has been consumed.
    pub fn finish(&self) -> Result<()> {
        if self.rest.is_some() {
            return Err(Error::format(messages::EXCESS_FIELDS));
        }
        Ok(())
    }
}

impl<'line> Iterator for Fields<'line> {
    type Item = &'line str;

    fn next(&mut self) -> Option<&'line str> {
        let rest = self.rest?;
        match rest.find(self.delimiter) {
            Some(index) => {
                self.rest = Some(&rest[index + self.delimiter.len_utf8()..]);
                Some(&rest[..index])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
