//! Display helpers shared by list and dashboard views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day], [year]");

/// Lifecycle of an appointment as the backend reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Accepted, Self::Rejected, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS badge modifier.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            Self::Accepted => "badge-success",
            Self::Rejected => "badge-danger",
            Self::Completed | Self::Cancelled => "badge-gray",
        }
    }

    /// Owners may cancel until the appointment is closed.
    #[must_use]
    pub fn can_cancel(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

/// `2026-03-05` -> `Mar 05, 2026`. Unparseable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    crate::booking::parse_date(date_part)
        .and_then(|date| date.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `HH:MM:SS` -> `HH:MM`.
#[must_use]
pub fn format_time(raw: &str) -> String {
    match raw.get(..5) {
        Some(hm) if raw.len() == 8 && raw.as_bytes()[5] == b':' => hm.to_owned(),
        _ => raw.to_owned(),
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Up to two uppercase initials from a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
