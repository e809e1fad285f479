//! Booking-flow rules: slot listing shape, date window, submit gating.
//!
//! The server is authoritative for double-booking; nothing here reserves a
//! slot. These rules only keep the form from sending requests that cannot
//! succeed.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::format_description::BorrowedFormatItem;
use time::{Duration, Month};

pub use time::Date;

use crate::error::ApiError;

/// How far ahead a patient may book.
pub const BOOKING_WINDOW_DAYS: i64 = 60;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// One bookable time on a given day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// `HH:MM`.
    pub time: String,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Response of `GET /doctors/{id}/available_slots/?date=YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// `false` when the doctor does not work that day (leave, off-day, past).
    pub available: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
    #[serde(default)]
    pub total_slots: Option<u32>,
    #[serde(default)]
    pub available_slots: Option<u32>,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl SlotAvailability {
    #[must_use]
    pub fn is_open(&self, time: &str) -> bool {
        self.available && self.slots.iter().any(|slot| slot.time == time && slot.available)
    }

    /// Day is workable but every slot is taken.
    #[must_use]
    pub fn fully_booked(&self) -> bool {
        self.available && !self.slots.iter().any(|slot| slot.available)
    }
}

/// Payload of `POST /bookings/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub booking_date: String,
    pub appointment_time: String,
}

/// In-progress booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: String,
    pub time: Option<String>,
}

impl BookingDraft {
    /// Change the date; any previously chosen slot no longer applies.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        self.time = None;
    }

    /// Choose `time` if `slots` lists it as open. Returns whether it was taken.
    pub fn select(&mut self, slots: &SlotAvailability, time: &str) -> bool {
        if slots.is_open(time) {
            self.time = Some(time.to_owned());
            true
        } else {
            false
        }
    }

    /// Whether slots should be fetched for the current date.
    #[must_use]
    pub fn ready_for_slots(&self) -> bool {
        parse_date(&self.date).is_some()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.ready_for_slots() && self.time.is_some()
    }

    /// Build the request body, or `None` while the form is incomplete.
    #[must_use]
    pub fn request(&self, doctor_id: i64) -> Option<BookingRequest> {
        if !self.can_submit() {
            return None;
        }
        Some(BookingRequest {
            doctor_id,
            booking_date: self.date.clone(),
            appointment_time: self.time.clone()?,
        })
    }
}

/// Parse a complete `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    if raw.len() != 10 {
        return None;
    }
    Date::parse(raw, DATE_FORMAT).ok()
}

/// Calendar date from numeric parts, `None` when they do not form a date.
#[must_use]
pub fn date_from_parts(year: i32, month: u8, day: u8) -> Option<Date> {
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Inclusive `(min, max)` bounds for the date picker.
#[must_use]
pub fn booking_window(today: Date) -> (Date, Date) {
    let last = today.checked_add(Duration::days(BOOKING_WINDOW_DAYS)).unwrap_or(Date::MAX);
    (today, last)
}

#[must_use]
pub fn within_window(date: Date, today: Date) -> bool {
    let (first, last) = booking_window(today);
    (first..=last).contains(&date)
}

/// Message to show for a rejected booking submission.
#[must_use]
pub fn booking_error_message(err: &ApiError) -> String {
    if let Some(fields) = err.fields() {
        if let Some(message) = fields.first("booking_date").or_else(|| fields.first("appointment_time")) {
            return message.to_owned();
        }
    }
    match err {
        ApiError::SessionExpired | ApiError::Network(_) => err.to_string(),
        _ => "Failed to create booking".to_owned(),
    }
}
