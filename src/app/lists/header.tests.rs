use rstest::rstest;

use super::*;

fn test_header() -> Header {
    Header::from(Box::new([Column::new("A"), Column::bound("B", 3, 5)]), 1)
}

#[test]
fn get_widths_test() {
    let header = test_header();

    assert_eq!(vec![1, 3], header.get_widths(5));
    assert_eq!(vec![1, 8], header.get_widths(10));
}

#[test]
fn data_lengths_test() {
    let mut header = test_header();

    header.set_data_length(1, 4);
    assert_eq!(4, header.get_data_length(1));
    assert_eq!(vec![1, 4], header.get_widths(5));

    header.set_data_length(1, 9);
    assert_eq!(vec![1, 5], header.get_widths(5));

    header.reset_data_lengths();
    assert_eq!(0, header.get_data_length(1));
    assert_eq!(vec![1, 3], header.get_widths(5));
}

#[rstest]
#[case(10, " A B       ")]
#[case(5, " A B  ")]
#[case(2, " A ")]
fn get_text_test(#[case] width: usize, #[case] expected: &str) {
    let header = test_header();

    assert_eq!(expected, header.get_text(width));
}
