use std::{cell::RefCell, rc::Rc};

use crossterm::event::{KeyCode, KeyEvent};

use super::*;
use crate::app::AppData;

fn test_filter() -> Filter {
    Filter::new(Rc::new(RefCell::new(AppData::default())), 60)
}

fn type_text(filter: &mut Filter, text: &str) {
    for c in text.chars() {
        filter.process_key(KeyEvent::from(KeyCode::Char(c)));
    }
}

#[test]
fn esc_reverts_value_test() {
    let mut filter = test_filter();

    filter.show();
    type_text(&mut filter, "abc");
    assert_eq!("abc", filter.value());

    let response = filter.process_key(KeyEvent::from(KeyCode::Esc));

    assert_eq!(ResponseEvent::Cancelled, response);
    assert_eq!("", filter.value());
    assert!(!filter.is_visible);
}

#[test]
fn enter_accepts_value_test() {
    let mut filter = test_filter();

    filter.show();
    type_text(&mut filter, "maria");
    let response = filter.process_key(KeyEvent::from(KeyCode::Enter));

    assert_eq!(ResponseEvent::Handled, response);
    assert_eq!("maria", filter.value());
    assert!(!filter.is_visible);

    filter.show();
    type_text(&mut filter, "xyz");
    filter.process_key(KeyEvent::from(KeyCode::Esc));

    assert_eq!("maria", filter.value());
}

#[test]
fn hidden_filter_ignores_keys_test() {
    let mut filter = test_filter();

    let response = filter.process_key(KeyEvent::from(KeyCode::Char('a')));

    assert_eq!(ResponseEvent::NotHandled, response);
    assert_eq!("", filter.value());
}
