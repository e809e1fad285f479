//! Every doctor's leave days, filterable by timing and text.

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;

use clinic::booking::{Date, parse_date};
use clinic::format::format_date;
use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::net::types::Leave;
use crate::state::auth::{absorb_error, use_session};
use crate::util::{clock, dialog};

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this leave?";

/// Timing filter relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Timing {
    All,
    Upcoming,
    Active,
    Past,
}

impl Timing {
    pub(crate) const ALL: [Self; 4] = [Self::All, Self::Upcoming, Self::Active, Self::Past];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Past => "past",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::All => "All Leaves",
            Self::Upcoming => "Upcoming",
            Self::Active => "Active Today",
            Self::Past => "Past",
        }
    }

    pub(crate) fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.as_str() == raw).unwrap_or(Self::All)
    }

    /// Whether a leave on `day` falls in this window. Unparseable dates only match `All`.
    pub(crate) fn contains(self, day: Option<Date>, today: Date) -> bool {
        match (self, day) {
            (Self::All, _) => true,
            (_, None) => false,
            (Self::Upcoming, Some(d)) => d > today,
            (Self::Active, Some(d)) => d == today,
            (Self::Past, Some(d)) => d < today,
        }
    }
}

/// Case-insensitive match on doctor name or reason; blank search matches all.
pub(crate) fn matches_search(leave: &Leave, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    leave.doctor_name.as_deref().is_some_and(|n| n.to_lowercase().contains(&needle))
        || leave.reason.to_lowercase().contains(&needle)
}

pub(crate) fn visible(leaves: &[Leave], timing: Timing, search: &str, today: Date) -> Vec<Leave> {
    leaves
        .iter()
        .filter(|l| timing.contains(parse_date(l.date.get(..10).unwrap_or(&l.date)), today))
        .filter(|l| matches_search(l, search))
        .cloned()
        .collect()
}

#[component]
pub fn AdminLeavesPage() -> impl IntoView {
    let session = use_session();
    let leaves = RwSignal::new(Vec::<Leave>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);
    let timing = RwSignal::new(Timing::All);
    let search = RwSignal::new(String::new());

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_leaves().await {
                Ok(list) => leaves.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    let remove = move |id: i64| {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_leave(id).await {
                Ok(()) => {
                    notice.set(Some((true, "Leave deleted successfully".to_owned())));
                    reload();
                }
                Err(e) => {
                    log::warn!("leave delete failed: {e}");
                    let _ = absorb_error(session, e);
                    notice.set(Some((false, "Failed to delete leave".to_owned())));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let shown = Memo::new(move |_| {
        let today = clock::today();
        leaves.with(|list| search.with(|s| visible(list, timing.get(), s, today)))
    });

    view! {
        <AdminLayout title="Doctor Leaves">
            <Notice notice=notice/>
            <div class="toolbar">
                <select class="form-input" on:change=move |ev| timing.set(Timing::parse(&event_target_value(&ev)))>
                    {Timing::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    class="form-input"
                    placeholder="Search by doctor or reason"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || shown.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No leaves found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Doctor"</th>
                                <th>"Date"</th>
                                <th>"Reason"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || shown.get() key=|l| l.id let:leave>
                                <tr>
                                    <td>{leave.doctor_name.clone().unwrap_or_default()}</td>
                                    <td>{format_date(&leave.date)}</td>
                                    <td>{leave.reason.clone()}</td>
                                    <td class="table__actions">
                                        <button class="btn btn-sm btn-danger" on:click=move |_| remove(leave.id)>
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
