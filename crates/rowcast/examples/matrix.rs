//! Load sparse matrix entries from tab-separated text.

use rowcast::{Options, Record, load_str};

#[derive(Debug, Record)]
struct Entry {
    row: u32,
    column: u32,
    value: f64,
}

const MATRIX: &str = "\
# 3x3 sparse matrix
0\t0\t1.0
1\t2\t-2.5

# another block
2\t1\t0.75
";

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> rowcast::Result<()> {
    let options = Options::default().with_header(false).with_comment(Some('#'));
    let entries: Vec<Entry> = load_str(MATRIX, options)?;
    println!("{} entries", entries.len());
    for entry in &entries {
        println!("({}, {}) = {}", entry.row, entry.column, entry.value);
    }
    Ok(())
}
