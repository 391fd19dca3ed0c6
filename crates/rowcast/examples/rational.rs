//! Parse a custom field type with a hand-written conversion.

use std::str::FromStr;

use rowcast::{FromField, Options, from_str_field, load_str};

#[derive(Debug, Clone, Copy)]
struct Rational {
    numerator: i64,
    denominator: i64,
}

impl FromStr for Rational {
    type Err = std::num::ParseIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = match text.split_once('/') {
            Some((numerator, denominator)) => (numerator.parse()?, denominator.parse()?),
            None => (text.parse()?, 1),
        };
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl FromField for Rational {
    fn from_field(text: &str) -> rowcast::Result<Self> {
        from_str_field(text)
    }
}

const CONSTANTS: &str = "\
value\tname
1/137\tfine structure constant, roughly
22/7\tpi, approximately
365\tdays in a year
";

fn main() -> rowcast::Result<()> {
    let constants: Vec<(Rational, String)> = load_str(CONSTANTS, Options::default())?;
    for (value, name) in &constants {
        println!("{}/{}\t{name}", value.numerator, value.denominator);
    }
    Ok(())
}
