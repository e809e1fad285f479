//! Admin department management.

#[cfg(test)]
#[path = "departments_test.rs"]
mod departments_test;

use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::net::types::{Department, DepartmentForm};
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

pub(crate) fn validate(form: &DepartmentForm) -> Result<(), &'static str> {
    if form.dep_name.trim().is_empty() {
        return Err("Department name is required");
    }
    Ok(())
}

pub(crate) fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete {name}? This action cannot be undone.")
}

#[component]
pub fn AdminDepartmentsPage() -> impl IntoView {
    let session = use_session();
    let departments = RwSignal::new(Vec::<Department>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);
    let form = RwSignal::new(DepartmentForm::default());

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_departments().await {
                Ok(list) => departments.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = form.get();
        if let Err(message) = validate(&body) {
            notice.set(Some((false, message.to_owned())));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_department(&body).await {
                Ok(created) => {
                    notice.set(Some((true, format!("Department {} created.", created.dep_name))));
                    form.set(DepartmentForm::default());
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };

    let remove = move |id: i64, name: String| {
        if !dialog::confirm(&delete_prompt(&name)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_department(id).await {
                Ok(()) => {
                    notice.set(Some((true, format!("{name} deleted."))));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <AdminLayout title="Departments">
            <Notice notice=notice/>
            <form class="card form form--inline" on:submit=on_create>
                <input
                    class="form-input"
                    placeholder="Department name"
                    prop:value=move || form.with(|f| f.dep_name.clone())
                    on:input=move |ev| form.update(|f| f.dep_name = event_target_value(&ev))
                />
                <input
                    class="form-input"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit">"Add Department"</button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Doctors"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || departments.get() key=|d| d.id let:dep>
                            <tr>
                                <td>{dep.dep_name.clone()}</td>
                                <td>{dep.description.clone()}</td>
                                <td>{dep.doctor_count}</td>
                                <td class="table__actions">
                                    <button
                                        class="btn btn-sm btn-danger"
                                        on:click={
                                            let name = dep.dep_name.clone();
                                            move |_| remove(dep.id, name.clone())
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </Show>
        </AdminLayout>
    }
}
