//! Public doctor directory with search and department filter.
//!
//! The department filter is seeded from `?department=<id>` so department
//! cards can deep-link into a filtered list.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::doctor_card::DoctorCard;
use crate::components::loading::Loading;
use crate::net::types::{Department, DoctorSummary};

/// Department id from the query string; junk is ignored.
pub(crate) fn department_filter(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok()).filter(|id: &i64| *id > 0)
}

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let query = use_query_map();
    let departments = RwSignal::new(Vec::<Department>::new());
    let doctors = RwSignal::new(Vec::<DoctorSummary>::new());
    let search = RwSignal::new(String::new());
    let department = RwSignal::new(query.with_untracked(|q| department_filter(q.get_str("department"))));
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(list) = crate::net::api::list_departments().await {
            departments.set(list);
        }
    });

    let reload = move || {
        loading.set(true);
        let term = search.get_untracked();
        let dep = department.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_doctors(Some(&term), dep).await {
                Ok(list) => {
                    doctors.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (term, dep, doctors, error);
    };

    // Department changes refetch immediately; search waits for submit.
    Effect::new(move || {
        department.track();
        reload();
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        reload();
    };

    view! {
        <section class="page doctors-page">
            <h1>"Our Doctors"</h1>
            <form class="filter-bar" on:submit=on_search>
                <input
                    class="form-input"
                    type="search"
                    placeholder="Search by name or specialty"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="form-input"
                    on:change=move |ev| department.set(department_filter(Some(&event_target_value(&ev))))
                >
                    <option value="" selected=move || department.get().is_none()>"All departments"</option>
                    <For each=move || departments.get() key=|d| d.id let:dep>
                        <option value=dep.id.to_string() selected=move || department.get() == Some(dep.id)>
                            {dep.dep_name.clone()}
                        </option>
                    </For>
                </select>
                <button class="btn btn-primary" type="submit">"Search"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || !doctors.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty">"No doctors match your search."</p> }
                >
                    <div class="doctor-grid">
                        <For each=move || doctors.get() key=|d| d.id let:doctor>
                            <DoctorCard doctor=doctor/>
                        </For>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
