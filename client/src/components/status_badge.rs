//! Colored pill for a booking status.

use clinic::format::BookingStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: BookingStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", status.badge_class())>{status.label()}</span> }
}
