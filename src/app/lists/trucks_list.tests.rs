use rstest::rstest;

use super::*;
use crate::app::fleet::TruckStatus;

fn test_fleet() -> Vec<Truck> {
    let roster = "\
- plate: ABC-1234
  model: Ford F-350
  driver: Maria Souza
  phone: (11) 98765-4321
  status: busy
- plate: DEF-5678
  model: Iveco Daily
  driver: Jorge Lima
  phone: (11) 91234-5678
- plate: GHI-9012
  model: Mercedes Atego
  driver: Ana Pereira
  phone: (21) 99876-5432
  status: maintenance
";

    serde_yaml::from_str(roster).unwrap()
}

#[test]
fn empty_filter_shows_all_test() {
    let mut list = TrucksList::from(test_fleet());
    assert_eq!(3, list.len());

    list.filter(None);

    assert_eq!(3, list.len());
    assert!(!list.is_filtered());
}

#[rstest]
#[case("zzz", 0)]
#[case("maria", 1)]
#[case("MARIA", 1)]
#[case("11", 2)]
#[case("def", 1)]
fn filter_test(#[case] pattern: &str, #[case] expected: usize) {
    let mut list = TrucksList::from(test_fleet());

    list.filter(Some(pattern.to_owned()));

    assert_eq!(expected, list.len());
    assert_eq!(3, list.full_len());
}

#[test]
fn filter_matches_any_cell_test() {
    let mut list = TrucksList::from(test_fleet());

    list.filter(Some("atego".to_owned()));
    assert_eq!(Some("GHI-9012"), list.get_highlighted_item_name());

    list.filter(Some("91234".to_owned()));
    assert_eq!(Some("DEF-5678"), list.get_highlighted_item_name());
}

#[test]
fn filter_is_idempotent_test() {
    let mut list = TrucksList::from(test_fleet());

    list.filter(Some("ma".to_owned()));
    let first = list.len();

    list.filter(Some("m".to_owned()));
    list.filter(Some("ma".to_owned()));

    assert_eq!(first, list.len());
}

#[test]
fn data_lengths_test() {
    let list = TrucksList::from(test_fleet());

    assert_eq!("Mercedes Atego".chars().count(), list.header.get_data_length(1));
    assert_eq!(TruckStatus::Maintenance.as_str().chars().count(), list.header.get_data_length(4));
}
