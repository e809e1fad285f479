//! Doctor workspace: overview stats, appointments, weekly schedule, leaves.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at `/dashboard` for staff accounts. Each tab loads its own data
//! when first shown; mutations reload only the affected list.

#[cfg(test)]
#[path = "doctor_dashboard_test.rs"]
mod doctor_dashboard_test;

use clinic::booking::{Date, parse_date};
use clinic::format::{BookingStatus, format_date, format_time};
use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::net::types::{Availability, AvailabilityForm, BookingSummary, DashboardStats, DoctorStats, Leave, LeaveForm};
use crate::state::auth::{absorb_error, use_session};
use crate::util::{clock, dialog};

pub(crate) const WEEKDAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
    Overview,
    Appointments,
    Schedule,
    Leaves,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Overview, Self::Appointments, Self::Schedule, Self::Leaves];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Appointments => "Appointments",
            Self::Schedule => "My Schedule",
            Self::Leaves => "Manage Leaves",
        }
    }
}

/// Transitions a doctor can apply from `status`.
pub(crate) fn next_statuses(status: BookingStatus) -> &'static [BookingStatus] {
    match status {
        BookingStatus::Pending => &[BookingStatus::Accepted, BookingStatus::Rejected],
        BookingStatus::Accepted => &[BookingStatus::Completed, BookingStatus::Cancelled],
        BookingStatus::Rejected | BookingStatus::Completed | BookingStatus::Cancelled => &[],
    }
}

/// Button text for moving a booking to `status`.
pub(crate) fn action_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Accepted => "Accept",
        BookingStatus::Rejected => "Reject",
        BookingStatus::Completed => "Mark Completed",
        BookingStatus::Cancelled => "Cancel",
        BookingStatus::Pending => "Reopen",
    }
}

/// `0` = Monday. Out-of-range days read as "Unknown".
pub(crate) fn weekday_name(day: u8) -> &'static str {
    WEEKDAYS.get(usize::from(day)).copied().unwrap_or("Unknown")
}

/// Local checks for a working window; times are `HH:MM`.
pub(crate) fn validate_window(form: &AvailabilityForm) -> Result<(), &'static str> {
    if usize::from(form.day) >= WEEKDAYS.len() {
        return Err("Choose a day of the week.");
    }
    if form.start_time.len() != 5 || form.end_time.len() != 5 {
        return Err("Enter both start and end time.");
    }
    // Zero-padded HH:MM compares correctly as text.
    if form.start_time >= form.end_time {
        return Err("End time must be after start time.");
    }
    Ok(())
}

/// Local checks for a leave day.
pub(crate) fn validate_leave(form: &LeaveForm, today: Date) -> Result<(), &'static str> {
    match parse_date(&form.date) {
        None => Err("Choose a leave date."),
        Some(date) if date < today => Err("Leave date cannot be in the past."),
        Some(_) => Ok(()),
    }
}

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let session = use_session();
    let tab = RwSignal::new(Tab::Overview);
    let stats = RwSignal::new(None::<DoctorStats>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::dashboard_stats().await {
            Ok(DashboardStats::Doctor(found)) => stats.set(Some(found)),
            Ok(_) => error.set(Some("These statistics are for doctors only.".to_owned())),
            Err(e) => error.set(Some(absorb_error(session, e))),
        }
    });

    let greeting = move || {
        stats.with(|s| match s {
            Some(s) => (format!("Welcome, {}!", s.doctor_name), format!("Department of {}", s.department)),
            None => {
                let name = session.with(|s| s.identity.as_ref().map(clinic::Identity::display_name)).unwrap_or_default();
                (format!("Welcome, {name}!"), String::new())
            }
        })
    };

    view! {
        <div class="doctor-dashboard">
            <aside class="doctor-dashboard__tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </aside>
            <main class="doctor-dashboard__content">
                <div class="card welcome-card">
                    <h1>{move || greeting().0}</h1>
                    <p>{move || greeting().1}</p>
                </div>
                {move || error.get().map(|text| view! { <div class="alert alert-error">{text}</div> })}
                {move || match tab.get() {
                    Tab::Overview => view! { <Overview stats=stats/> }.into_any(),
                    Tab::Appointments => view! { <Appointments/> }.into_any(),
                    Tab::Schedule => view! { <Schedule/> }.into_any(),
                    Tab::Leaves => view! { <Leaves/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn Overview(stats: RwSignal<Option<DoctorStats>>) -> impl IntoView {
    move || match stats.get() {
        None => view! { <Loading/> }.into_any(),
        Some(s) => view! {
            <div class="stat-grid">
                <StatCard label="Total Appointments" value=s.total_appointments/>
                <StatCard label="Pending" value=s.pending_appointments tone="warning"/>
                <StatCard label="Accepted" value=s.accepted_appointments tone="success"/>
                <StatCard label="Today's Appointments" value=s.today_appointments tone="info"/>
                <StatCard label="Upcoming" value=s.upcoming_appointments/>
            </div>
        }
            .into_any(),
    }
}

#[component]
fn Appointments() -> impl IntoView {
    let session = use_session();
    let filter = RwSignal::new(None::<BookingStatus>);
    let bookings = RwSignal::new(Vec::<BookingSummary>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);

    let reload = move || {
        loading.set(true);
        let status = filter.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_bookings(status).await {
                Ok(list) => bookings.set(list),
                Err(e) => notice.set(Some(absorb_error(session, e))),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (status, session);
    };
    Effect::new(move || {
        filter.track();
        reload();
    });

    let update = move |id: i64, status: BookingStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_booking_status(id, status).await {
                Ok(ack) => {
                    notice.set(ack.message);
                    reload();
                }
                Err(e) => notice.set(Some(absorb_error(session, e))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2>"Appointments"</h2>
                <select
                    class="form-input"
                    on:change=move |ev| filter.set(BookingStatus::parse(&event_target_value(&ev)))
                >
                    <option value="">"All"</option>
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || notice.get().map(|text| view! { <div class="alert alert-info">{text}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Patient"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || bookings.get() key=|b| (b.id, b.status) let:booking>
                            <tr>
                                <td>{booking.p_name.clone().unwrap_or_default()}</td>
                                <td>{format_date(&booking.booking_date)}</td>
                                <td>{booking.appointment_time.as_deref().map(format_time).unwrap_or_default()}</td>
                                <td>
                                    <StatusBadge status=booking.status/>
                                </td>
                                <td class="table__actions">
                                    {next_statuses(booking.status)
                                        .iter()
                                        .map(|&next| {
                                            let id = booking.id;
                                            view! {
                                                <button class="btn btn-sm" on:click=move |_| update(id, next)>
                                                    {action_label(next)}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn Schedule() -> impl IntoView {
    let session = use_session();
    let windows = RwSignal::new(Vec::<Availability>::new());
    let form = RwSignal::new(AvailabilityForm { day: 0, start_time: "09:00".to_owned(), end_time: "17:00".to_owned() });
    let notice = RwSignal::new(None::<(bool, String)>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_availability().await {
                Ok(mut list) => {
                    list.sort_by_key(|w| w.day);
                    windows.set(list);
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };
    reload();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = form.get();
        if let Err(message) = validate_window(&body) {
            notice.set(Some((false, message.to_owned())));
            return;
        }
        let existing = windows.with(|list| list.iter().find(|w| w.day == body.day).map(|w| w.id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_availability(existing, &body).await {
                Ok(_) => {
                    notice.set(Some((true, format!("{} schedule saved.", weekday_name(body.day)))));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = existing;
    };

    let remove = move |id: i64| {
        if !dialog::confirm("Remove this working window?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_availability(id).await {
                Ok(()) => reload(),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="card">
            <h2>"My Schedule"</h2>
            {move || notice.get().map(|(ok, text)| view! { <div class=if ok { "alert alert-success" } else { "alert alert-error" }>{text}</div> })}
            <form class="form form--inline" on:submit=on_save>
                <select
                    class="form-input"
                    on:change=move |ev| {
                        let day = event_target_value(&ev).parse().unwrap_or(0);
                        form.update(|f| f.day = day);
                    }
                >
                    {WEEKDAYS
                        .iter()
                        .zip(0u8..)
                        .map(|(name, day)| view! { <option value=day.to_string()>{*name}</option> })
                        .collect_view()}
                </select>
                <input
                    class="form-input"
                    type="time"
                    prop:value=move || form.with(|f| f.start_time.clone())
                    on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="time"
                    prop:value=move || form.with(|f| f.end_time.clone())
                    on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit">"Save"</button>
            </form>
            <ul class="schedule-list">
                <For each=move || windows.get() key=|w| (w.id, w.start_time.clone(), w.end_time.clone()) let:window>
                    <li class="schedule-list__item">
                        <span class="schedule-list__day">{weekday_name(window.day)}</span>
                        <span>{format!("{} - {}", format_time(&window.start_time), format_time(&window.end_time))}</span>
                        <button class="btn btn-sm btn-danger" on:click=move |_| remove(window.id)>"Remove"</button>
                    </li>
                </For>
            </ul>
        </div>
    }
}

#[component]
fn Leaves() -> impl IntoView {
    let session = use_session();
    let leaves = RwSignal::new(Vec::<Leave>::new());
    let form = RwSignal::new(LeaveForm::default());
    let notice = RwSignal::new(None::<(bool, String)>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_leaves().await {
                Ok(list) => leaves.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };
    reload();

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = form.get();
        if let Err(message) = validate_leave(&body, clock::today()) {
            notice.set(Some((false, message.to_owned())));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_leave(&body).await {
                Ok(_) => {
                    form.set(LeaveForm::default());
                    notice.set(Some((true, "Leave added.".to_owned())));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };

    let remove = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this leave?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_leave(id).await {
                Ok(()) => reload(),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="card">
            <h2>"Manage Leaves"</h2>
            {move || notice.get().map(|(ok, text)| view! { <div class=if ok { "alert alert-success" } else { "alert alert-error" }>{text}</div> })}
            <form class="form form--inline" on:submit=on_add>
                <input
                    class="form-input"
                    type="date"
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Reason (optional)"
                    prop:value=move || form.with(|f| f.reason.clone())
                    on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit">"Add Leave"</button>
            </form>
            <ul class="leave-list">
                <For each=move || leaves.get() key=|l| l.id let:leave>
                    <li class="leave-list__item">
                        <span>{format_date(&leave.date)}</span>
                        <span class="muted">{leave.reason.clone()}</span>
                        <button class="btn btn-sm btn-danger" on:click=move |_| remove(leave.id)>"Delete"</button>
                    </li>
                </For>
            </ul>
        </div>
    }
}
