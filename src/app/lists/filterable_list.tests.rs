use super::*;
use crate::app::lists::BasicFilterContext;

pub struct TestItem {
    pub name: String,
}

impl TestItem {
    pub fn new(name: impl std::fmt::Display) -> Self {
        Self { name: name.to_string() }
    }
}

impl Filterable<BasicFilterContext> for TestItem {
    fn get_context(pattern: &str) -> BasicFilterContext {
        pattern.to_owned().into()
    }

    fn is_matching(&self, context: &mut BasicFilterContext) -> bool {
        self.name.contains(&context.pattern)
    }
}

#[test]
fn len_test() {
    let mut list = FilterableList::from([1, 2, 3, 4, 5, 10, 11].iter().map(TestItem::new).collect::<Vec<_>>());
    assert_eq!(7, list.len());
    assert_eq!(7, list.full_len());

    let mut context = TestItem::get_context("1");
    list.filter(&mut context);
    assert_eq!(3, list.len());
    assert_eq!(7, list.full_len());
}

#[test]
fn empty_pattern_keeps_all_test() {
    let mut list = FilterableList::from(["abc", "bcd", "cde"].iter().map(TestItem::new).collect::<Vec<_>>());

    let mut context = TestItem::get_context("");
    list.filter(&mut context);

    assert_eq!(3, list.len());
}

#[test]
fn filter_is_idempotent_test() {
    let mut list = FilterableList::from(["abc", "bcd", "cde"].iter().map(TestItem::new).collect::<Vec<_>>());

    let mut context = TestItem::get_context("bc");
    list.filter(&mut context);
    let first: Vec<String> = list.iter().map(|i| i.name.clone()).collect();

    list.filter(&mut context);
    let second: Vec<String> = list.iter().map(|i| i.name.clone()).collect();

    assert_eq!(first, second);
}

#[test]
fn iterators_test() {
    let mut list = FilterableList::from(["abc", "bcd", "cde"].iter().map(TestItem::new).collect::<Vec<_>>());

    let mut iter = list.iter();
    assert_eq!("abc", iter.next().unwrap().name);
    assert_eq!("bcd", iter.next().unwrap().name);
    assert_eq!("cde", iter.next().unwrap().name);
    assert!(iter.next().is_none());

    let mut context = TestItem::get_context("bc");
    list.filter(&mut context);

    let mut iter = list.iter();
    assert_eq!("abc", iter.next().unwrap().name);
    assert_eq!("bcd", iter.next().unwrap().name);
    assert!(iter.next().is_none());

    let mut iter = list.full_iter();
    assert_eq!("abc", iter.next().unwrap().name);
    assert_eq!("bcd", iter.next().unwrap().name);
    assert_eq!("cde", iter.next().unwrap().name);
    assert!(iter.next().is_none());
}

#[test]
fn mutable_iterators_test() {
    let mut list = FilterableList::from(["abc", "bcd", "cde"].iter().map(TestItem::new).collect::<Vec<_>>());

    let mut context = TestItem::get_context("bc");
    list.filter(&mut context);

    for i in &mut list {
        *i = TestItem::new("test");
    }

    list.filter_reset();

    assert_eq!("test", list[0].name);
    assert_eq!("test", list[1].name);
    assert_eq!("cde", list[2].name);
}

#[test]
fn push_resets_filter_test() {
    let mut list = FilterableList::from(["abc", "bcd"].iter().map(TestItem::new).collect::<Vec<_>>());

    let mut context = TestItem::get_context("abc");
    list.filter(&mut context);
    assert_eq!(1, list.len());

    list.push(TestItem::new("abcd"));
    assert_eq!(3, list.len());
}
