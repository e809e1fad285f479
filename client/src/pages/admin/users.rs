//! Registered accounts with their booking activity.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use clinic::format::BookingStatus;
use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::net::types::{BookingSummary, Identity};
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

/// Per-account booking counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Activity {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
}

pub(crate) fn activity_for(user_id: i64, bookings: &[BookingSummary]) -> Activity {
    bookings.iter().filter(|b| b.user == Some(user_id)).fold(Activity::default(), |mut acc, b| {
        acc.total += 1;
        match b.status {
            BookingStatus::Pending => acc.pending += 1,
            BookingStatus::Accepted => acc.accepted += 1,
            _ => {}
        }
        acc
    })
}

pub(crate) fn delete_prompt(user: &Identity) -> String {
    format!("Are you sure you want to delete {}? This action cannot be undone.", user.username)
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = use_session();
    let users = RwSignal::new(Vec::<Identity>::new());
    let bookings = RwSignal::new(Vec::<BookingSummary>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_users().await {
                Ok(list) => users.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            // Counters are decoration; a failed booking fetch leaves them at zero.
            match crate::net::api::list_bookings(None).await {
                Ok(list) => bookings.set(list),
                Err(e) => log::warn!("user activity unavailable: {e}"),
            }
            loading.set(false);
        });
    };
    reload();

    let remove = move |user: Identity| {
        if !dialog::confirm(&delete_prompt(&user)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(user.id).await {
                Ok(()) => {
                    notice.set(Some((true, format!("{} deleted.", user.username))));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };

    view! {
        <AdminLayout title="Users">
            <Notice notice=notice/>
            <p class="page-subtitle">{move || format!("{} registered users", users.with(Vec::len))}</p>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="card-grid">
                    <For each=move || users.get() key=|u| u.id let:user>
                        {
                            let id = user.id;
                            let activity = move || bookings.with(|list| activity_for(id, list));
                            let role = user.role();
                            let target = user.clone();
                            view! {
                                <div class="card user-card">
                                    <div class="user-card__avatar">{clinic::format::initials(&user.display_name())}</div>
                                    <h3>{user.display_name()}</h3>
                                    <p class="muted">"@" {user.username.clone()}</p>
                                    <p class="muted">{user.email.clone().unwrap_or_default()}</p>
                                    <span class="badge">{role.label()}</span>
                                    <dl class="user-card__stats">
                                        <dt>"Bookings"</dt>
                                        <dd>{move || activity().total}</dd>
                                        <dt>"Pending"</dt>
                                        <dd>{move || activity().pending}</dd>
                                        <dt>"Accepted"</dt>
                                        <dd>{move || activity().accepted}</dd>
                                    </dl>
                                    <button
                                        class="btn btn-sm btn-danger"
                                        on:click=move |_| remove(target.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        }
                    </For>
                </div>
            </Show>
        </AdminLayout>
    }
}
