//! Edge-case tables for the text utilities
//!
//! One table per operation, covering the documented boundary behavior:
//! empty inputs, mismatched quotes, unterminated markers, and
//! replacements that contain their own search string.

use rstest::rstest;
use sqltext::text::{
    multi_find_between, remove_parentheses, replace_all, to_lower_case, trim, trim_left,
    trim_right,
};

#[rstest]
#[case("", "")]
#[case("  ", "")]
#[case("\t\n select", "select")]
#[case("select \r\n", "select \r\n")]
#[case("a b", "a b")]
fn trim_left_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(trim_left(input), expected);
}

#[rstest]
#[case("", "")]
#[case("  ", "")]
#[case("select \x0B\x0C", "select")]
#[case("  select", "  select")]
fn trim_right_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(trim_right(input), expected);
}

#[rstest]
#[case("", "")]
#[case("  ", "")]
#[case(" \t select 1 \n ", "select 1")]
#[case("no edges", "no edges")]
#[case("inner  spacing kept", "inner  spacing kept")]
fn trim_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(trim(input), expected);
}

#[rstest]
#[case("ABC123", "abc123")]
#[case("", "")]
#[case("already lower", "already lower")]
#[case("SELECT * FROM Person;", "select * from person;")]
#[case("Straße", "straße")]
fn to_lower_case_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_lower_case(input), expected);
}

#[rstest]
#[case("'abc'", "abc")]
#[case("\"abc\"", "abc")]
#[case("abc", "abc")]
#[case("'a\"", "'a\"")]
#[case("'", "'")]
#[case("\"", "\"")]
#[case("", "")]
#[case("''", "")]
#[case("\"\"", "")]
#[case("''abc''", "'abc'")]
#[case("'abc\"def'", "abc\"def")]
fn remove_parentheses_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(remove_parentheses(input), expected);
}

#[rstest]
#[case("a[1]b[2]c", "[", "]", &["1", "2"])]
#[case("a[1b[2]c", "[", "]", &["1b[2"])]
#[case("abc", "[", "]", &[])]
#[case("", "[", "]", &[])]
#[case("a[1]b[2", "[", "]", &["1"])]
#[case("[][]", "[", "]", &["", ""])]
#[case("x{{a}}y{{b}}z", "{{", "}}", &["a", "b"])]
#[case("|a|b|", "|", "|", &["a"])]
#[case("a[1]b", "", "]", &[])]
#[case("a[1]b", "[", "", &[])]
fn multi_find_between_cases(
    #[case] source: &str,
    #[case] pre: &str,
    #[case] post: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(multi_find_between(source, pre, post), expected);
}

#[rstest]
#[case("aaa", "a", "aa", "aaaaaa")]
#[case("abc", "x", "y", "abc")]
#[case("abc", "", "y", "abc")]
#[case("", "a", "b", "")]
#[case("a-b-c", "-", "", "abc")]
#[case("@a@ and @a@", "@a@", "x", "x and x")]
#[case("select @p from t", "@p", "@p", "select @p from t")]
fn replace_all_cases(
    #[case] source: &str,
    #[case] search: &str,
    #[case] replacement: &str,
    #[case] expected: &str,
) {
    assert_eq!(replace_all(source, search, replacement), expected);
}
