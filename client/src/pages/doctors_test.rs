use super::*;
use crate::pages::departments::doctors_href;

#[test]
fn department_filter_accepts_positive_ids_only() {
    assert_eq!(department_filter(Some("3")), Some(3));
    assert_eq!(department_filter(Some(" 12 ")), Some(12));
    assert_eq!(department_filter(Some("")), None);
    assert_eq!(department_filter(Some("cardio")), None);
    assert_eq!(department_filter(Some("0")), None);
    assert_eq!(department_filter(None), None);
}

#[test]
fn department_cards_deep_link_into_filter() {
    let department = Department { id: 4, dep_name: "ENT".to_owned(), description: String::new(), doctor_count: 0 };
    let href = doctors_href(&department);
    let raw = href.strip_prefix("/doctors?department=");
    assert_eq!(department_filter(raw), Some(4));
}
