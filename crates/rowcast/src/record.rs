//! Record types parseable from one line of delimited text.

use crate::convert::FromField;
use crate::error::{Error, Result};
use crate::fields::Fields;

/// A row type whose fields parse, in declaration order, from one line.
///
/// Implemented for tuples of up to 32 [`FromField`] elements; plain structs
/// derive it with `#[derive(Record)]`. Exceeding 32 fields is a compile-time
/// failure.
pub trait Record: Sized {
    /// Number of fields a row of this type occupies.
    const FIELD_COUNT: usize;

    /// Parse one record, consuming exactly [`Self::FIELD_COUNT`] tokens.
    fn from_fields(fields: &mut Fields<'_>) -> Result<Self>;

    /// Accept or reject a freshly parsed record. Accepts by default.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Build a validation result from a predicate, for use in validation hooks.
pub fn check(pred: bool, message: &str) -> Result<()> {
    if pred {
        Ok(())
    } else {
        Err(Error::validation(message))
    }
}

impl Record for () {
    const FIELD_COUNT: usize = 0;

    fn from_fields(_fields: &mut Fields<'_>) -> Result<Self> {
        Ok(())
    }
}

macro_rules! tuple_record {
    ($count:expr => $($name:ident),+) => {
        impl<$($name: FromField),+> Record for ($($name,)+) {
            const FIELD_COUNT: usize = $count;

            fn from_fields(fields: &mut Fields<'_>) -> Result<Self> {
                Ok(($(fields.next_field::<$name>()?,)+))
            }
        }
    };
}

// Implementations for positional records of hard-coded arities.
tuple_record!(1 => T1);
tuple_record!(2 => T1, T2);
tuple_record!(3 => T1, T2, T3);
tuple_record!(4 => T1, T2, T3, T4);
tuple_record!(5 => T1, T2, T3, T4, T5);
tuple_record!(6 => T1, T2, T3, T4, T5, T6);
tuple_record!(7 => T1, T2, T3, T4, T5, T6, T7);
tuple_record!(8 => T1, T2, T3, T4, T5, T6, T7, T8);
tuple_record!(9 => T1, T2, T3, T4, T5, T6, T7, T8, T9);
tuple_record!(10 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
tuple_record!(11 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
tuple_record!(12 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
tuple_record!(13 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13);
tuple_record!(14 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14);
tuple_record!(15 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15);
tuple_record!(16 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16);
tuple_record!(17 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17);
tuple_record!(18 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18);
tuple_record!(19 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19);
tuple_record!(20 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20);
tuple_record!(21 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21);
tuple_record!(22 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22);
tuple_record!(23 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23);
tuple_record!(24 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24);
tuple_record!(25 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25);
tuple_record!(26 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26);
tuple_record!(27 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27);
tuple_record!(28 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28);
tuple_record!(29 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29);
tuple_record!(30 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29, T30);
tuple_record!(31 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29, T30, T31);
tuple_record!(32 => T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16, T17, T18, T19, T20, T21, T22, T23, T24, T25, T26, T27, T28, T29, T30, T31, T32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_arities_match_field_counts() {
        assert_eq!(<() as Record>::FIELD_COUNT, 0);
        assert_eq!(<(u32,) as Record>::FIELD_COUNT, 1);
        assert_eq!(<(u32, f64) as Record>::FIELD_COUNT, 2);
        assert_eq!(<(u32, f64, String) as Record>::FIELD_COUNT, 3);
        assert_eq!(<(u32, u32, f64, String) as Record>::FIELD_COUNT, 4);
    }

    #[test]
    fn parses_tuples_in_declaration_order() {
        let mut fields = Fields::new("0\t1\t1.23\tID_01", '\t');
        let record = <(u32, u32, f64, String)>::from_fields(&mut fields).unwrap();
        assert_eq!(record, (0, 1, 1.23, "ID_01".to_string()));
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn empty_tuple_consumes_nothing() {
        let mut fields = Fields::new("", '\t');
        <() as Record>::from_fields(&mut fields).unwrap();
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn supports_the_maximum_arity() {
        type Wide = (
            u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
            u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        );
        assert_eq!(<Wide as Record>::FIELD_COUNT, 32);
        let line = ["7"; 32].join("\t");
        let mut fields = Fields::new(&line, '\t');
        let record = Wide::from_fields(&mut fields).unwrap();
        assert!(fields.finish().is_ok());
        assert_eq!(record.0, 7);
        assert_eq!(record.31, 7);
    }

    #[test]
    fn validation_helper_builds_validation_errors() {
        assert!(check(true, "fine").is_ok());
        let error = check(false, "span must not be inverted").unwrap_err();
        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(error.message(), "span must not be inverted");
    }

    struct Span {
        start: u32,
        end: u32,
    }

    impl Record for Span {
        const FIELD_COUNT: usize = 2;

        fn from_fields(fields: &mut Fields<'_>) -> Result<Self> {
            Ok(Self {
                start: fields.next_field()?,
                end: fields.next_field()?,
            })
        }

        fn validate(&self) -> Result<()> {
            check(self.start <= self.end, "span must not be inverted")
        }
    }

    #[test]
    fn hand_written_records_validate() {
        let mut fields = Fields::new("3\t9", '\t');
        let span = Span::from_fields(&mut fields).unwrap();
        assert!(span.validate().is_ok());

        let mut fields = Fields::new("9\t3", '\t');
        let span = Span::from_fields(&mut fields).unwrap();
        assert!(span.validate().is_err());
    }
}
