//! Property checks for field splitting.

use proptest::prelude::*;
use rowcast::Fields;

proptest! {
    #[test]
    fn splitting_inverts_joining(tokens in prop::collection::vec("[a-z0-9 ]{0,8}", 1..8)) {
        let line = tokens.join("\t");
        prop_assume!(!line.is_empty());
        let split: Vec<&str> = Fields::new(&line, '\t').collect();
        prop_assert_eq!(split, tokens);
    }

    #[test]
    fn token_count_is_delimiter_count_plus_one(line in "[a-z\t]{1,40}") {
        let delimiters = line.matches('\t').count();
        let tokens = Fields::new(&line, '\t').count();
        prop_assert_eq!(tokens, delimiters + 1);
    }
}
