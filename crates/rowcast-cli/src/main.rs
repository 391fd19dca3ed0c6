//! Field dump tool for delimiter-separated text files.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::Parser;

mod cli;
mod logging;
mod table;

use crate::cli::Cli;
use crate::logging::init_logging;
use crate::table::print_table;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.verbosity);
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let mut parser = rowcast::Parser::new(BufReader::new(file), cli.delimiter);

    parser.skip_comment(cli.comment)?;
    let header = if cli.no_header {
        None
    } else {
        let mut fields = Vec::new();
        if !parser.parse_fields(&mut fields)? {
            bail!(rowcast::messages::MISSING_HEADER);
        }
        Some(fields)
    };

    let mut rows = Vec::new();
    loop {
        parser.skip_comment(cli.comment)?;
        let mut fields = Vec::new();
        if !parser.parse_fields(&mut fields)? {
            break;
        }
        rows.push(fields);
        if cli.limit.is_some_and(|limit| rows.len() >= limit) {
            break;
        }
    }
    tracing::debug!(rows = rows.len(), lines = parser.line_number(), "scanned input");

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let labels =
        header.unwrap_or_else(|| (1..=width).map(|column| column.to_string()).collect());
    if labels.is_empty() {
        println!("no records");
        return Ok(());
    }
    print_table(&labels, &rows);
    Ok(())
}
