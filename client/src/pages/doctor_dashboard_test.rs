use super::*;
use time::macros::date;

#[test]
fn pending_bookings_can_be_accepted_or_rejected() {
    assert_eq!(next_statuses(BookingStatus::Pending), &[BookingStatus::Accepted, BookingStatus::Rejected]);
    assert_eq!(next_statuses(BookingStatus::Accepted), &[BookingStatus::Completed, BookingStatus::Cancelled]);
}

#[test]
fn closed_bookings_offer_no_actions() {
    for status in [BookingStatus::Rejected, BookingStatus::Completed, BookingStatus::Cancelled] {
        assert!(next_statuses(status).is_empty(), "{status:?}");
    }
}

#[test]
fn weekday_names_start_on_monday() {
    assert_eq!(weekday_name(0), "Monday");
    assert_eq!(weekday_name(6), "Sunday");
    assert_eq!(weekday_name(7), "Unknown");
}

#[test]
fn working_window_must_be_ordered() {
    let form = |start: &str, end: &str| AvailabilityForm { day: 2, start_time: start.to_owned(), end_time: end.to_owned() };
    assert_eq!(validate_window(&form("09:00", "17:00")), Ok(()));
    assert_eq!(validate_window(&form("17:00", "09:00")), Err("End time must be after start time."));
    assert_eq!(validate_window(&form("09:00", "09:00")), Err("End time must be after start time."));
    assert_eq!(validate_window(&form("", "09:00")), Err("Enter both start and end time."));
    assert_eq!(
        validate_window(&AvailabilityForm { day: 7, ..form("09:00", "10:00") }),
        Err("Choose a day of the week.")
    );
}

#[test]
fn leave_dates_must_be_complete_and_not_past() {
    let today = date!(2026 - 10 - 15);
    let form = |date: &str| LeaveForm { date: date.to_owned(), reason: String::new() };
    assert_eq!(validate_leave(&form("2026-10-15"), today), Ok(()));
    assert_eq!(validate_leave(&form("2026-10-14"), today), Err("Leave date cannot be in the past."));
    assert_eq!(validate_leave(&form("2026-10"), today), Err("Choose a leave date."));
}
