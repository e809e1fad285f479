//! The signed-in patient's bookings, with cancellation.

#[cfg(test)]
#[path = "my_bookings_test.rs"]
mod my_bookings_test;

use clinic::format::{BookingStatus, format_date, format_time};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::net::types::BookingSummary;
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

pub(crate) const CANCEL_PROMPT: &str = "Are you sure you want to cancel this booking?";

/// Whether the list offers a cancel button.
pub(crate) fn offers_cancel(status: BookingStatus) -> bool {
    status.can_cancel()
}

/// `Mar 02, 2026 at 09:20`, or just the date when no time is set.
pub(crate) fn when(booking: &BookingSummary) -> String {
    let date = format_date(&booking.booking_date);
    match booking.appointment_time.as_deref() {
        Some(time) => format!("{date} at {}", format_time(time)),
        None => date,
    }
}

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let session = use_session();
    let bookings = RwSignal::new(Vec::<BookingSummary>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_bookings(None).await {
                Ok(list) => bookings.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    let cancel = move |id: i64| {
        if !dialog::confirm(CANCEL_PROMPT) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_booking(id).await {
                Ok(ack) => {
                    let text = ack.message.unwrap_or_else(|| "Booking cancelled successfully".to_owned());
                    notice.set(Some((true, text)));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session);
    };

    view! {
        <section class="page my-bookings-page">
            <h1>"My Bookings"</h1>
            {move || {
                notice
                    .get()
                    .map(|(ok, text)| {
                        view! { <div class=if ok { "alert alert-success" } else { "alert alert-error" }>{text}</div> }
                    })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || !bookings.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="card empty">
                                <p>"You have no bookings yet."</p>
                                <A href="/doctors" attr:class="btn btn-primary">"Find a doctor"</A>
                            </div>
                        }
                    }
                >
                    <div class="booking-list">
                        <For each=move || bookings.get() key=|b| (b.id, b.status) let:booking>
                            <div class="card booking-item">
                                <div class="booking-item__body">
                                    <h3>{booking.doctor_name.clone().unwrap_or_default()}</h3>
                                    <p class="muted">{format!("Patient: {}", booking.p_name.clone().unwrap_or_default())}</p>
                                    <p>{when(&booking)}</p>
                                    <StatusBadge status=booking.status/>
                                </div>
                                <Show when=move || offers_cancel(booking.status)>
                                    <button class="btn btn-sm btn-danger" on:click=move |_| cancel(booking.id)>
                                        "Cancel"
                                    </button>
                                </Show>
                            </div>
                        </For>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
