//! Conversion of raw field text into typed values.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::{Error, Result, messages};

/// Conversion from the raw text of one field to a typed value.
///
/// Built-in implementations cover the primitive integers and floats, `char`,
/// `bool` and `String`. Custom field types implement this trait directly, or
/// delegate to [`from_str_field`] when they already implement [`FromStr`].
pub trait FromField: Sized {
    /// Convert the raw text of one field, which must be consumed entirely.
    fn from_field(text: &str) -> Result<Self>;
}

/// Convert a field through the type's [`FromStr`] implementation.
///
/// `FromStr` already rejects leftover text, so a one-line `FromField`
/// implementation can delegate here. Any failure maps to a generic parse
/// error.
pub fn from_str_field<T: FromStr>(text: &str) -> Result<T> {
    text.parse().map_err(|_| Error::parse(messages::PARSE_ERROR))
}

fn integer_error<T: FromStr>(text: &str, error: &ParseIntError) -> Error {
    match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::parse(messages::OUT_OF_RANGE)
        }
        _ => {
            // Whole-token parsing reports trailing garbage and plain junk the
            // same way; a field whose sign+digit prefix is a valid value for
            // the target type is diagnosed as leftover characters instead.
            let prefix = integer_prefix(text);
            if !prefix.is_empty() && prefix.len() < text.len() && prefix.parse::<T>().is_ok() {
                Error::parse(messages::LEFTOVER)
            } else {
                Error::parse(messages::PARSE_ERROR)
            }
        }
    }
}

/// Longest leading run matching the integer grammar: optional sign, digits.
fn integer_prefix(text: &str) -> &str {
    let sign = text.len() - text.strip_prefix(['+', '-']).unwrap_or(text).len();
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    &text[..sign + digits]
}

macro_rules! integer_from_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(text: &str) -> Result<Self> {
                    text.parse().map_err(|error| integer_error::<Self>(text, &error))
                }
            }
        )*
    };
}

integer_from_field!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Float parsing rounds out-of-range values to infinity instead of failing,
// so the only failure here is malformed text.
macro_rules! float_from_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromField for $ty {
                fn from_field(text: &str) -> Result<Self> {
                    text.parse().map_err(|_| Error::parse(messages::PARSE_ERROR))
                }
            }
        )*
    };
}

float_from_field!(f32, f64);

impl FromField for char {
    fn from_field(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(value), None) => Ok(value),
            _ => Err(Error::parse(messages::PARSE_ERROR)),
        }
    }
}

impl FromField for String {
    fn from_field(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl FromField for bool {
    fn from_field(text: &str) -> Result<Self> {
        from_str_field(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integral_values() {
        assert_eq!(i32::from_field("1").unwrap(), 1);
        assert_eq!(i32::from_field("-1").unwrap(), -1);
        assert_eq!(i32::from_field("12345").unwrap(), 12345);
        assert_eq!(u64::from_field("0").unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_integers() {
        for text in ["", "xxx", "4.56", "-456"] {
            let error = u32::from_field(text).unwrap_err();
            assert!(matches!(error, Error::Parse(_)), "text = {text:?}");
        }
        assert_eq!(i32::from_field("xxx").unwrap_err().message(), messages::PARSE_ERROR);
        assert_eq!(i32::from_field("123xxx").unwrap_err().message(), messages::LEFTOVER);
        assert_eq!(i8::from_field("-12xx").unwrap_err().message(), messages::LEFTOVER);
        // A signed prefix is no prefix at all for an unsigned type.
        assert_eq!(u32::from_field("-1xx").unwrap_err().message(), messages::PARSE_ERROR);
    }

    #[test]
    fn integer_overflow_is_out_of_range() {
        let big = "9".repeat(52);
        let error = u32::from_field(&big).unwrap_err();
        assert_eq!(error.message(), messages::OUT_OF_RANGE);

        let error = i8::from_field("-129").unwrap_err();
        assert_eq!(error.message(), messages::OUT_OF_RANGE);

        // Out of range is a distinct diagnosis, not generic malformation.
        assert_ne!(messages::OUT_OF_RANGE, messages::PARSE_ERROR);
    }

    #[test]
    fn parses_floating_point_values() {
        assert_eq!(f64::from_field("0.1").unwrap(), 0.1);
        assert_eq!(f64::from_field("-0.1").unwrap(), -0.1);
        assert_eq!(f64::from_field("123.45").unwrap(), 123.45);
    }

    #[test]
    fn rejects_malformed_floats() {
        for text in ["", "xxx", "123.45xxx"] {
            let error = f64::from_field(text).unwrap_err();
            assert_eq!(error.message(), messages::PARSE_ERROR, "text = {text:?}");
        }
    }

    #[test]
    fn parses_single_character() {
        assert_eq!(char::from_field("a").unwrap(), 'a');
        assert_eq!(char::from_field("€").unwrap(), '€');
        for text in ["", "aa"] {
            let error = char::from_field(text).unwrap_err();
            assert_eq!(error.message(), messages::PARSE_ERROR, "text = {text:?}");
        }
    }

    #[test]
    fn parses_string_token_verbatim() {
        assert_eq!(String::from_field("").unwrap(), "");
        assert_eq!(String::from_field("abc").unwrap(), "abc");
        assert_eq!(String::from_field(" padded ").unwrap(), " padded ");
    }

    #[test]
    fn parses_bool_token() {
        assert!(bool::from_field("true").unwrap());
        assert!(!bool::from_field("false").unwrap());
        assert!(bool::from_field("1").is_err());
    }

    #[derive(Debug, PartialEq)]
    struct Percent(u8);

    impl FromStr for Percent {
        type Err = ParseIntError;

        fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
            Ok(Self(text.trim_end_matches('%').parse()?))
        }
    }

    impl FromField for Percent {
        fn from_field(text: &str) -> Result<Self> {
            from_str_field(text)
        }
    }

    #[test]
    fn custom_types_delegate_to_from_str() {
        assert_eq!(Percent::from_field("75%").unwrap(), Percent(75));
        let error = Percent::from_field("much%").unwrap_err();
        assert_eq!(error.message(), messages::PARSE_ERROR);
    }
}
