use super::*;

fn booking(id: i64, user: Option<i64>, status: BookingStatus) -> BookingSummary {
    BookingSummary {
        id,
        p_name: None,
        doctor_name: None,
        user_name: None,
        user,
        booking_date: "2026-11-02".to_owned(),
        appointment_time: None,
        status,
    }
}

#[test]
fn activity_counts_only_that_users_bookings() {
    let list = [
        booking(1, Some(4), BookingStatus::Pending),
        booking(2, Some(4), BookingStatus::Accepted),
        booking(3, Some(4), BookingStatus::Cancelled),
        booking(4, Some(5), BookingStatus::Pending),
        booking(5, None, BookingStatus::Pending),
    ];
    assert_eq!(activity_for(4, &list), Activity { total: 3, pending: 1, accepted: 1 });
    assert_eq!(activity_for(9, &list), Activity::default());
}

#[test]
fn delete_prompt_names_account() {
    let user = Identity { id: 3, username: "amy".to_owned(), ..Identity::default() };
    assert_eq!(delete_prompt(&user), "Are you sure you want to delete amy? This action cannot be undone.");
}
