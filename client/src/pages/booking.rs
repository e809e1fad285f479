//! Booking page for one doctor: pick a date, pick a free slot, submit.
//!
//! DESIGN
//! ======
//! The form state is a `clinic::booking::BookingDraft`; this page only wires
//! it to inputs. Slots are fetched once the date is a complete `YYYY-MM-DD`
//! inside the booking window, and a response is dropped if the date changed
//! while it was in flight. Availability shown here is advisory: the server
//! re-checks the slot on submit and its field errors are shown verbatim.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use clinic::ApiError;
use clinic::booking::{BookingDraft, Date, booking_error_message, booking_window, format_iso_date, parse_date, within_window};
use clinic::format::format_time;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::net::types::{DoctorDetail, SlotAvailability};
use crate::state::auth::{absorb_error, use_session};
use crate::util::clock;

pub(crate) const OUTSIDE_WINDOW: &str = "Please choose a date within the next 60 days.";
pub(crate) const AFTER_BOOKING: &str = "/my-bookings";
pub(crate) const DOCTOR_NOT_FOUND: &str = "Doctor not found.";

/// Text shown in place of the doctor card when it cannot be loaded.
pub(crate) fn doctor_load_failure(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 404, .. } => DOCTOR_NOT_FOUND.to_owned(),
        other => other.to_string(),
    }
}

/// Date to fetch slots for, `Ok(None)` while the input is still partial.
pub(crate) fn slot_query(draft: &BookingDraft, today: Date) -> Result<Option<String>, &'static str> {
    let Some(date) = parse_date(&draft.date) else {
        return Ok(None);
    };
    if within_window(date, today) { Ok(Some(draft.date.clone())) } else { Err(OUTSIDE_WINDOW) }
}

/// CSS class for a slot button.
pub(crate) fn slot_class(available: bool, selected: bool) -> &'static str {
    match (available, selected) {
        (_, true) => "slot slot--selected",
        (true, false) => "slot",
        (false, false) => "slot slot--taken",
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();
    let doctor_id = params.with_untracked(|p| p.get_str("doctor_id").and_then(|raw| raw.parse::<i64>().ok()));

    let today = clock::today();
    let (first_day, last_day) = booking_window(today);

    let doctor = RwSignal::new(None::<DoctorDetail>);
    let doctor_missing = RwSignal::new(doctor_id.is_none().then(|| DOCTOR_NOT_FOUND.to_owned()));
    let draft = RwSignal::new(BookingDraft::default());
    let slots = RwSignal::new(None::<SlotAvailability>);
    let slots_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(id) = doctor_id {
        leptos::task::spawn_local(async move {
            match crate::net::api::get_doctor(id).await {
                Ok(detail) => doctor.set(Some(detail)),
                Err(e) => {
                    let message = doctor_load_failure(&e);
                    let _ = absorb_error(session, e);
                    doctor_missing.set(Some(message));
                }
            }
        });
    }

    let on_date = move |ev: leptos::ev::Event| {
        draft.update(|d| d.set_date(event_target_value(&ev)));
        slots.set(None);
        slots_loading.set(false);
        error.set(None);
        let query = match draft.with_untracked(|d| slot_query(d, today)) {
            Ok(Some(date)) => date,
            Ok(None) => return,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(id) = doctor_id else {
            return;
        };
        slots_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::available_slots(id, &query).await;
            if draft.with_untracked(|d| d.date != query) {
                return;
            }
            match result {
                Ok(found) => slots.set(Some(found)),
                Err(e) => error.set(Some(absorb_error(session, e))),
            }
            slots_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, query);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(request) = doctor_id.and_then(|id| draft.with(|d| d.request(id))) else {
            return;
        };
        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(_) => navigate(AFTER_BOOKING, NavigateOptions::default()),
                Err(e) => {
                    let message = booking_error_message(&e);
                    let _ = absorb_error(session, e);
                    error.set(Some(message));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, navigate);
    };

    let slot_buttons = move || {
        let selected = draft.with(|d| d.time.clone());
        slots.get().map(|found| {
            if !found.available {
                let reason = found.reason.unwrap_or_else(|| "Doctor is not available on this date.".to_owned());
                return view! { <p class="alert alert-info">{reason}</p> }.into_any();
            }
            if found.fully_booked() {
                return view! { <p class="alert alert-info">"All slots on this date are booked."</p> }.into_any();
            }
            found
                .slots
                .into_iter()
                .map(|slot| {
                    let is_selected = selected.as_deref() == Some(slot.time.as_str());
                    let time = slot.time.clone();
                    view! {
                        <button
                            type="button"
                            class=slot_class(slot.available, is_selected)
                            disabled=!slot.available
                            on:click=move |_| {
                                slots.with_untracked(|s| {
                                    if let Some(s) = s {
                                        draft.update(|d| {
                                            d.select(s, &time);
                                        });
                                    }
                                });
                            }
                        >
                            {format_time(&slot.time)}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <section class="page booking-page">
            {move || {
                doctor_missing.get().map(|text| view! { <div class="alert alert-error">{text}</div> })
            }}
            <Show
                when=move || doctor.get().is_some() || doctor_missing.get().is_some()
                fallback=|| view! { <Loading/> }
            >
                {move || {
                    doctor
                        .get()
                        .map(|d| {
                            view! {
                                <div class="card booking-page__doctor">
                                    <h1>{format!("Book with {}", d.doc_name)}</h1>
                                    <p>{d.doc_spec.clone()}</p>
                                    <p class="muted">{d.department.dep_name.clone()}</p>
                                </div>
                            }
                        })
                }}
            </Show>
            {move || error.get().map(|text| view! { <div class="alert alert-error">{text}</div> })}
            <form class="card form" on:submit=on_submit>
                <label class="form-label">"Date"</label>
                <input
                    class="form-input"
                    type="date"
                    min=format_iso_date(first_day)
                    max=format_iso_date(last_day)
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=on_date
                />
                <Show when=move || slots_loading.get()>
                    <Loading message="Loading available slots..."/>
                </Show>
                <div class="slot-grid">{slot_buttons}</div>
                <button
                    class="btn btn-primary btn-block"
                    type="submit"
                    disabled=move || submitting.get() || !draft.with(BookingDraft::can_submit)
                >
                    {move || if submitting.get() { "Booking..." } else { "Confirm Booking" }}
                </button>
            </form>
        </section>
    }
}
