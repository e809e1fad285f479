//! Admin view of every booking: filter by status, change status, delete.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use clinic::format::{BookingStatus, format_date, format_time};
use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::net::types::BookingSummary;
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this booking?";

/// Filter select value; the empty option means every status.
pub(crate) fn parse_filter(raw: &str) -> Option<BookingStatus> {
    BookingStatus::parse(raw)
}

/// Bookings per status in [`BookingStatus::ALL`] order.
pub(crate) fn status_counts(bookings: &[BookingSummary]) -> Vec<(BookingStatus, usize)> {
    BookingStatus::ALL
        .into_iter()
        .map(|status| (status, bookings.iter().filter(|b| b.status == status).count()))
        .collect()
}

fn patient_label(booking: &BookingSummary) -> String {
    booking.p_name.clone().or_else(|| booking.user_name.clone()).unwrap_or_else(|| "Unknown".to_owned())
}

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let session = use_session();
    let bookings = RwSignal::new(Vec::<BookingSummary>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);
    let filter = RwSignal::new(None::<BookingStatus>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_bookings(filter.get_untracked()).await {
                Ok(list) => bookings.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    let set_status = move |id: i64, status: BookingStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_booking_status(id, status).await {
                Ok(_) => {
                    notice.set(Some((true, format!("Booking marked {}.", status.label()))));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    };

    let remove = move |id: i64| {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_booking(id).await {
                Ok(()) => {
                    notice.set(Some((true, "Booking deleted.".to_owned())));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <AdminLayout title="Bookings">
            <Notice notice=notice/>
            <div class="toolbar">
                <select
                    class="form-input"
                    on:change=move |ev| {
                        filter.set(parse_filter(&event_target_value(&ev)));
                        loading.set(true);
                        reload();
                    }
                >
                    <option value="">"All statuses"</option>
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <span class="toolbar__summary">
                    {move || {
                        bookings
                            .with(|list| status_counts(list))
                            .into_iter()
                            .filter(|(_, n)| *n > 0)
                            .map(|(status, n)| format!("{}: {n}", status.label()))
                            .collect::<Vec<_>>()
                            .join(" · ")
                    }}
                </span>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || bookings.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No bookings found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Patient"</th>
                                <th>"Doctor"</th>
                                <th>"Date"</th>
                                <th>"Time"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || bookings.get() key=|b| (b.id, b.status) let:booking>
                                <tr>
                                    <td>{patient_label(&booking)}</td>
                                    <td>{booking.doctor_name.clone().unwrap_or_default()}</td>
                                    <td>{format_date(&booking.booking_date)}</td>
                                    <td>{booking.appointment_time.as_deref().map(format_time).unwrap_or_default()}</td>
                                    <td><StatusBadge status=booking.status/></td>
                                    <td class="table__actions">
                                        <select
                                            class="form-input form-input--sm"
                                            on:change=move |ev| {
                                                if let Some(next) = parse_filter(&event_target_value(&ev)) {
                                                    set_status(booking.id, next);
                                                }
                                            }
                                        >
                                            {BookingStatus::ALL
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <option value=status.as_str() selected=status == booking.status>
                                                            {status.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                        <button class="btn btn-sm btn-danger" on:click=move |_| remove(booking.id)>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </Show>
        </AdminLayout>
    }
}
