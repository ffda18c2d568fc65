use rstest::rstest;

use super::*;

#[rstest]
#[case("sample text", 6, "sample")]
#[case("sample", 10, "sample")]
#[case("zażółć", 3, "zaż")]
fn truncate_test(#[case] text: &str, #[case] max_chars: usize, #[case] expected: &str) {
    assert_eq!(expected, truncate(text, max_chars));
}

#[rstest]
#[case("abc", 5, "abc  ")]
#[case("abcdef", 4, "abcd")]
#[case("abc", 3, "abc")]
fn add_padding_test(#[case] text: &str, #[case] len: usize, #[case] expected: &str) {
    assert_eq!(expected, add_padding(text, len));
}
