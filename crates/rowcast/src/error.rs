use std::fmt;

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

pub mod messages {
    //! Standard messages carried by [`Error`](super::Error) values.

    pub const MISSING_HEADER: &str = "header is expected but not seen";
    pub const MISSING_FIELD: &str = "insufficient number of fields";
    pub const EXCESS_FIELDS: &str = "excess fields";
    pub const PARSE_ERROR: &str = "parse error";
    pub const OUT_OF_RANGE: &str = "value out of range";
    pub const LEFTOVER: &str = "excess character(s) at the end of a field";
    pub const INPUT_ERROR: &str = "input error";
}

/// Error raised while reading delimited text.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A line had the wrong shape: missing header, too few or too many fields.
    #[error("{0}")]
    Format(Context),
    /// A field's text could not be converted to the requested type.
    #[error("{0}")]
    Parse(Context),
    /// Reading from the underlying input failed.
    #[error("{0}")]
    Io(Context),
    /// A parsed record was rejected by its validation hook.
    #[error("{0}")]
    Validation(Context),
}

/// Position context shared by every [`Error`] kind.
#[derive(Debug)]
pub struct Context {
    message: String,
    line: Option<String>,
    line_number: Option<usize>,
}

impl Context {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            line_number: None,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(number) = self.line_number {
            write!(f, " (at line {number})")?;
        }
        if let Some(line) = self.line.as_deref().filter(|line| !line.is_empty()) {
            write!(f, ": \"{line}\"")?;
        }
        Ok(())
    }
}

impl Error {
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format(Context::new(message))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(Context::new(message))
    }

    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(Context::new(message))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(Context::new(message))
    }

    /// The base message, without any position context.
    pub fn message(&self) -> &str {
        &self.context().message
    }

    /// Verbatim text of the offending line, when known.
    pub fn line(&self) -> Option<&str> {
        self.context().line.as_deref()
    }

    /// 1-based number of the offending line, when known.
    pub fn line_number(&self) -> Option<usize> {
        self.context().line_number
    }

    /// Stamp the error with the offending line's text and 1-based number.
    pub(crate) fn at_line(mut self, line: &str, line_number: usize) -> Self {
        let context = self.context_mut();
        context.line = Some(line.to_string());
        context.line_number = Some(line_number);
        self
    }

    fn context(&self) -> &Context {
        match self {
            Error::Format(context)
            | Error::Parse(context)
            | Error::Io(context)
            | Error::Validation(context) => context,
        }
    }

    fn context_mut(&mut self) -> &mut Context {
        match self {
            Error::Format(context)
            | Error::Parse(context)
            | Error::Io(context)
            | Error::Validation(context) => context,
        }
    }
}
