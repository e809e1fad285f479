use super::*;
use time::macros::date;

fn leave(id: i64, date: &str, doctor: &str, reason: &str) -> Leave {
    Leave { id, date: date.to_owned(), reason: reason.to_owned(), doctor_name: Some(doctor.to_owned()) }
}

#[test]
fn timing_splits_around_today() {
    let today = date!(2026 - 10 - 15);
    assert!(Timing::Upcoming.contains(Some(date!(2026 - 10 - 16)), today));
    assert!(Timing::Active.contains(Some(today), today));
    assert!(Timing::Past.contains(Some(date!(2026 - 10 - 14)), today));
    assert!(!Timing::Upcoming.contains(Some(today), today));
    assert!(Timing::All.contains(None, today));
    assert!(!Timing::Past.contains(None, today));
}

#[test]
fn unknown_filter_value_shows_everything() {
    assert_eq!(Timing::parse("upcoming"), Timing::Upcoming);
    assert_eq!(Timing::parse("bogus"), Timing::All);
}

#[test]
fn visible_combines_timing_and_search() {
    let today = date!(2026 - 10 - 15);
    let list = [
        leave(1, "2026-10-20", "Dr. Patel", "Conference"),
        leave(2, "2026-10-01", "Dr. Patel", "Vacation"),
        leave(3, "2026-10-22", "Dr. Chen", "Family"),
    ];
    let ids = |found: Vec<Leave>| found.into_iter().map(|l| l.id).collect::<Vec<_>>();
    assert_eq!(ids(visible(&list, Timing::Upcoming, "", today)), vec![1, 3]);
    assert_eq!(ids(visible(&list, Timing::All, "patel", today)), vec![1, 2]);
    assert_eq!(ids(visible(&list, Timing::Upcoming, "  CONF ", today)), vec![1]);
    assert_eq!(ids(visible(&list, Timing::Past, "chen", today)), Vec::<i64>::new());
}
