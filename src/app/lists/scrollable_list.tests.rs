use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent};

use super::*;
use crate::app::lists::BasicFilterContext;

struct TestRow {
    name: String,
}

impl TestRow {
    fn new(name: impl std::fmt::Display) -> Self {
        Self { name: name.to_string() }
    }
}

impl Row for TestRow {
    fn name(&self) -> &str {
        &self.name
    }

    fn column_text(&self, _column: usize) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl Filterable<BasicFilterContext> for TestRow {
    fn get_context(pattern: &str) -> BasicFilterContext {
        pattern.to_owned().into()
    }

    fn is_matching(&self, context: &mut BasicFilterContext) -> bool {
        self.name.contains(&context.pattern)
    }
}

fn test_list(names: &[&str]) -> ScrollableList<TestRow, BasicFilterContext> {
    let mut list = ScrollableList::from(names.iter().map(TestRow::new).collect::<Vec<_>>());
    list.highlight_first_item();
    list
}

#[test]
fn filter_test() {
    let mut list = test_list(&["abc", "bcd", "cde", "def"]);
    assert_eq!(4, list.len());

    list.filter(Some("cd".to_owned()));
    assert_eq!(2, list.len());
    assert_eq!(4, list.full_len());
    assert!(list.is_filtered());

    list.filter(None);
    assert_eq!(4, list.len());
    assert!(!list.is_filtered());
}

#[test]
fn filter_highlight_recovery_test() {
    let mut list = test_list(&["abc", "bcd", "cde"]);
    list.process_key(KeyEvent::from(KeyCode::Down));
    assert_eq!(Some("bcd"), list.get_highlighted_item_name());

    list.filter(Some("cd".to_owned()));
    assert_eq!(Some("bcd"), list.get_highlighted_item_name());

    list.filter(Some("ab".to_owned()));
    assert_eq!(Some("abc"), list.get_highlighted_item_name());
}

#[test]
fn filter_same_pattern_test() {
    let mut list = test_list(&["abc", "bcd", "cde"]);

    assert!(list.filter(Some("bc".to_owned())));
    assert!(!list.filter(Some("bc".to_owned())));
    assert_eq!(2, list.len());
}

#[test]
fn process_key_test() {
    let mut list = test_list(&["abc", "bcd", "cde", "def"]);
    list.update_page(2);

    assert_eq!(ResponseEvent::Handled, list.process_key(KeyEvent::from(KeyCode::Down)));
    assert_eq!(Some(1), list.get_highlighted_item_index());

    assert_eq!(ResponseEvent::Handled, list.process_key(KeyEvent::from(KeyCode::End)));
    assert_eq!(Some(3), list.get_highlighted_item_index());

    assert_eq!(ResponseEvent::Handled, list.process_key(KeyEvent::from(KeyCode::Home)));
    assert_eq!(Some(0), list.get_highlighted_item_index());

    assert_eq!(ResponseEvent::NotHandled, list.process_key(KeyEvent::from(KeyCode::Char('x'))));
}

#[test]
fn update_page_test() {
    let mut list = test_list(&["a", "b", "c", "d", "e", "f"]);
    list.update_page(3);
    assert_eq!(0, list.page_start);

    list.process_key(KeyEvent::from(KeyCode::End));
    list.update_page(3);
    assert_eq!(3, list.page_start);

    let page = list.get_page().unwrap().map(|i| i.data.name.clone()).collect::<Vec<_>>();
    assert_eq!(vec!["d", "e", "f"], page);
}

#[test]
fn push_keeps_filter_test() {
    let mut list = test_list(&["abc", "bcd"]);
    list.filter(Some("abc".to_owned()));
    assert_eq!(1, list.len());

    list.push(TestRow::new("abcd"));
    assert_eq!(2, list.len());
    assert_eq!(3, list.full_len());
}
