use std::borrow::Cow;

use rstest::rstest;

use super::*;
use crate::app::lists::{BasicFilterContext, Column};

struct TestRow {
    name: String,
    desc: String,
}

impl TestRow {
    fn new(name: &str, desc: &str) -> Self {
        Self {
            name: name.to_owned(),
            desc: desc.to_owned(),
        }
    }
}

impl Row for TestRow {
    fn name(&self) -> &str {
        &self.name
    }

    fn column_text(&self, column: usize) -> Cow<'_, str> {
        match column {
            0 => Cow::Borrowed(&self.name),
            1 => Cow::Borrowed(&self.desc),
            _ => Cow::Borrowed(""),
        }
    }
}

impl Filterable<BasicFilterContext> for TestRow {
    fn get_context(pattern: &str) -> BasicFilterContext {
        pattern.into()
    }

    fn is_matching(&self, context: &mut BasicFilterContext) -> bool {
        self.name.contains(&context.pattern)
    }
}

fn test_header() -> Header {
    Header::from(Box::new([Column::bound("NAME", 6, 10), Column::bound("DESC", 8, 12)]), 1)
}

#[rstest]
#[case(20, "abc    winch        ")]
#[case(15, "abc    winch   ")]
#[case(10, "abc    win")]
fn get_text_test(#[case] width: usize, #[case] expected: &str) {
    let item = Item::new(TestRow::new("abc", "winch"));

    assert_eq!(expected, item.get_text(&test_header(), width));
}

#[rstest]
#[case("text", 6, "text  ")]
#[case("long text", 4, "long")]
#[case("text", 0, "")]
fn push_cell_test(#[case] text: &str, #[case] len: usize, #[case] expected: &str) {
    let mut row = String::new();
    row.push_cell(text, len);

    assert_eq!(expected, row);
}
