//! Admin panel pages under `/admin/*`.
//!
//! All of them render inside `AdminLayout` and share one shape: load a list on
//! mount, mutate through `net::api`, reload the list, show the outcome inline.

pub mod bookings;
pub mod contacts;
pub mod dashboard;
pub mod departments;
pub mod doctors;
pub mod leaves;
pub mod users;

use leptos::prelude::*;

/// Inline success/error banner used by every admin page.
#[component]
pub(crate) fn Notice(notice: RwSignal<Option<(bool, String)>>) -> impl IntoView {
    move || {
        notice.get().map(|(ok, text)| {
            let class = if ok { "alert alert-success" } else { "alert alert-error" };
            view! {
                <div class=class>
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })
    }
}
