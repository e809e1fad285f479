//! Admin overview: site-wide counters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::net::types::{AdminStats, DashboardStats};
use crate::state::auth::{absorb_error, use_session};

pub(crate) const STATS_FAILED: &str = "Failed to load dashboard statistics.";

/// Admin counters out of a dashboard response; `None` for another role's shape.
pub(crate) fn admin_stats(found: DashboardStats) -> Option<AdminStats> {
    match found {
        DashboardStats::Admin(stats) => Some(stats),
        other => {
            log::warn!("admin dashboard got non-admin stats: {other:?}");
            None
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let stats = RwSignal::new(None::<AdminStats>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::dashboard_stats().await {
            Ok(found) => match admin_stats(found) {
                Some(found) => stats.set(Some(found)),
                None => error.set(Some(STATS_FAILED.to_owned())),
            },
            Err(e) => error.set(Some(absorb_error(session, e))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <AdminLayout title="Dashboard">
            {move || error.get().map(|text| view! { <div class="alert alert-error">{text}</div> })}
            {move || match stats.get() {
                None if error.with(Option::is_some) => ().into_any(),
                None => view! { <Loading/> }.into_any(),
                Some(s) => view! {
                    <div class="stat-grid">
                        <StatCard label="Total Doctors" value=s.total_doctors/>
                        <StatCard label="Total Departments" value=s.total_departments/>
                        <StatCard label="Total Bookings" value=s.total_bookings/>
                        <StatCard label="Pending Bookings" value=s.pending_bookings tone="warning"/>
                        <StatCard label="Accepted Bookings" value=s.accepted_bookings tone="success"/>
                        <StatCard label="Total Patients" value=s.total_patients/>
                        <StatCard label="Today's Bookings" value=s.today_bookings tone="info"/>
                        <StatCard label="Unread Messages" value=s.unread_contacts tone="danger"/>
                    </div>
                }
                    .into_any(),
            }}
        </AdminLayout>
    }
}
