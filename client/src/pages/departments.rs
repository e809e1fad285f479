//! Public department directory.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loading::Loading;
use crate::net::types::Department;

/// Link to the doctors list filtered to `department`.
pub(crate) fn doctors_href(department: &Department) -> String {
    format!("/doctors?department={}", department.id)
}

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let departments = RwSignal::new(Vec::<Department>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_departments().await {
            Ok(list) => departments.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    view! {
        <section class="page departments-page">
            <h1>"Departments"</h1>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="department-grid">
                    <For each=move || departments.get() key=|d| d.id let:department>
                        <div class="card department-card">
                            <h3>{department.dep_name.clone()}</h3>
                            <p>{department.description.clone()}</p>
                            <p class="department-card__count">
                                {format!("{} doctors", department.doctor_count)}
                            </p>
                            <A href=doctors_href(&department) attr:class="btn btn-outline">"View doctors"</A>
                        </div>
                    </For>
                </div>
            </Show>
        </section>
    }
}
