//! Loading delimited text into typed record sequences.

use std::io::BufRead;

use crate::error::{Error, Result, messages};
use crate::options::Options;
use crate::parser::Parser;
use crate::record::Record;

/// Load every record from `input` according to `options`.
///
/// Comment and blank lines are skipped throughout. When `options.header` is
/// set, the first content line is consumed without being parsed as data.
/// Each remaining content line parses into one `T`, which is validated
/// before it is appended.
///
/// # Errors
///
/// Fails on the first malformed, unconvertible, or rejected line, on a
/// missing header, or when the underlying reader fails. Errors raised for a
/// record line carry that line's text and 1-based number.
pub fn load<T: Record>(input: impl BufRead, options: Options) -> Result<Vec<T>> {
    let mut parser = Parser::new(input, options.delimiter);

    parser.skip_comment(options.comment)?;

    if options.header {
        let mut header = Vec::new();
        if !parser.parse_fields(&mut header)? {
            return Err(Error::format(messages::MISSING_HEADER));
        }
        tracing::debug!(fields = header.len(), "skipped header line");
    }

    let mut records = Vec::new();
    loop {
        parser.skip_comment(options.comment)?;

        let Some(record) = parser.parse_record::<T>()? else {
            break;
        };
        record
            .validate()
            .map_err(|error| error.at_line(parser.current_line(), parser.line_number()))?;
        records.push(record);
    }

    tracing::debug!(records = records.len(), lines = parser.line_number(), "loaded input");
    Ok(records)
}

/// Load records from in-memory text. See [`load`].
pub fn load_str<T: Record>(text: &str, options: Options) -> Result<Vec<T>> {
    load(text.as_bytes(), options)
}
