use rstest::rstest;

use super::*;

fn truck(plate: &str, model: &str, driver: &str, phone: &str, status: TruckStatus) -> Truck {
    Truck {
        plate: plate.to_owned(),
        model: model.to_owned(),
        driver: driver.to_owned(),
        phone: phone.to_owned(),
        status,
    }
}

#[test]
fn deserialize_roster_test() {
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
";

    let trucks: Vec<Truck> = serde_yaml::from_str(roster).unwrap();

    assert_eq!(2, trucks.len());
    assert_eq!("ABC-1234", trucks[0].plate);
    assert_eq!(TruckStatus::Busy, trucks[0].status);
    assert_eq!(TruckStatus::Available, trucks[1].status);
}

#[rstest]
#[case("maria", true)]
#[case("MARIA", true)]
#[case("abc", true)]
#[case("f-350", true)]
#[case("98765", true)]
#[case("busy", true)]
#[case("", true)]
#[case("volvo", false)]
fn is_matching_test(#[case] pattern: &str, #[case] expected: bool) {
    let truck = truck("ABC-1234", "Ford F-350", "Maria Souza", "(11) 98765-4321", TruckStatus::Busy);

    let mut context = Truck::get_context(pattern);

    assert_eq!(expected, truck.is_matching(&mut context));
}

#[test]
fn column_text_test() {
    let truck = truck("ABC-1234", "Ford F-350", "Maria Souza", "(11) 98765-4321", TruckStatus::Maintenance);

    assert_eq!("ABC-1234", truck.column_text(0));
    assert_eq!("Ford F-350", truck.column_text(1));
    assert_eq!("Maria Souza", truck.column_text(2));
    assert_eq!("(11) 98765-4321", truck.column_text(3));
    assert_eq!("maintenance", truck.column_text(4));
    assert_eq!("", truck.column_text(5));
}
