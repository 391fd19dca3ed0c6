//! Typed loading of delimiter-separated tabular text.
//!
//! A record type's own field layout drives parsing: the field count and
//! field types come from the type itself, each field's text is converted
//! through [`FromField`], and parse failures report the offending line and
//! its number. Records are plain structs deriving [`Record`] or tuples of up
//! to 32 fields.
//!
//! # Usage
//!
//! ```
//! use rowcast::{Options, Record, load_str};
//!
//! #[derive(Record)]
//! struct Sample {
//!     row: u32,
//!     column: u32,
//!     value: f64,
//! }
//!
//! let text = "row\tcolumn\tvalue\n1\t2\t1.23\n";
//! let samples: Vec<Sample> = load_str(text, Options::default())?;
//! assert_eq!(samples.len(), 1);
//! assert_eq!(samples[0].column, 2);
//! # Ok::<(), rowcast::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod fields;
pub mod load;
pub mod options;
pub mod parser;
pub mod reader;
pub mod record;

pub use convert::{FromField, from_str_field};
pub use error::{Error, Result, messages};
pub use fields::Fields;
pub use load::{load, load_str};
pub use options::Options;
pub use parser::Parser;
pub use reader::LineReader;
pub use record::{Record, check};

pub use rowcast_derive::Record;
