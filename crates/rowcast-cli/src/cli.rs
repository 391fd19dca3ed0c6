//! CLI argument definitions for the field dump tool.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "rowcast",
    version,
    about = "Inspect delimiter-separated text files",
    long_about = "Read a delimiter-separated text file and pretty-print its fields.\n\n\
                  Blank lines and comment lines are skipped before parsing, and the\n\
                  first remaining line is treated as a header unless --no-header is set."
)]
pub struct Cli {
    /// Path to the input file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter character.
    #[arg(long, value_name = "CHAR", default_value_t = '\t')]
    pub delimiter: char,

    /// Comment prefix; lines starting with it are skipped.
    #[arg(long, value_name = "CHAR")]
    pub comment: Option<char>,

    /// Treat the first line as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Show at most this many records.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}
