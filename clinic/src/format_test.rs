use super::*;

#[test]
fn status_vocabulary_matches_backend() {
    for status in BookingStatus::ALL {
        assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        let json = serde_json::to_string(&status).expect("json");
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
    assert_eq!(BookingStatus::parse("archived"), None);
}

#[test]
fn status_badges_and_labels() {
    assert_eq!(BookingStatus::Pending.badge_class(), "badge-warning");
    assert_eq!(BookingStatus::Accepted.badge_class(), "badge-success");
    assert_eq!(BookingStatus::Rejected.badge_class(), "badge-danger");
    assert_eq!(BookingStatus::Cancelled.badge_class(), "badge-gray");
    assert_eq!(BookingStatus::Completed.label(), "Completed");
}

#[test]
fn closed_bookings_cannot_be_cancelled() {
    assert!(BookingStatus::Pending.can_cancel());
    assert!(BookingStatus::Accepted.can_cancel());
    assert!(!BookingStatus::Completed.can_cancel());
    assert!(!BookingStatus::Cancelled.can_cancel());
}

#[test]
fn dates_render_month_day_year() {
    assert_eq!(format_date("2026-03-05"), "Mar 05, 2026");
    assert_eq!(format_date("2026-12-31T08:15:00Z"), "Dec 31, 2026");
    assert_eq!(format_date("not a date"), "not a date");
    assert_eq!(format_date(""), "");
}

#[test]
fn times_drop_seconds() {
    assert_eq!(format_time("09:20:00"), "09:20");
    assert_eq!(format_time("09:20"), "09:20");
}

#[test]
fn truncate_counts_characters() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdef", 3), "abc...");
    assert_eq!(truncate("héllo wörld", 5), "héllo...");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("gregory house"), "GH");
    assert_eq!(initials("Ana María López"), "AM");
    assert_eq!(initials(""), "");
}
