//! Admin doctor management: list, create (with login account), edit, delete.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

use clinic::ApiError;
use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::net::types::{Department, DoctorForm, DoctorSummary};
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_FIELD_ERRORS: usize = 3;

/// Local checks. New doctors need a complete login account; edits may leave
/// account fields blank to keep them.
pub(crate) fn validate(form: &DoctorForm, creating: bool) -> Result<(), &'static str> {
    if form.doc_name.trim().is_empty() || form.doc_spec.trim().is_empty() || form.department_id <= 0 {
        return Err("Please fill in all required doctor fields");
    }
    let account = [&form.username, &form.email, &form.password];
    if creating && account.iter().any(|f| f.trim().is_empty()) {
        return Err("Please fill in all login credentials (username, email, password) to create an account");
    }
    if !form.password.is_empty() && form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Up to three `field: message` lines, plus a count of the rest.
pub(crate) fn error_lines(err: &ApiError) -> Vec<String> {
    let Some(fields) = err.fields().filter(|f| !f.is_empty()) else {
        return vec![err.to_string()];
    };
    let all: Vec<(&str, &[String])> = fields.iter().collect();
    let mut lines: Vec<String> = all
        .iter()
        .take(MAX_FIELD_ERRORS)
        .filter_map(|(field, messages)| messages.first().map(|m| format!("{field}: {m}")))
        .collect();
    if all.len() > MAX_FIELD_ERRORS {
        lines.push(format!("... and {} more validation errors.", all.len() - MAX_FIELD_ERRORS));
    }
    lines
}

fn form_for(doctor: &DoctorSummary) -> DoctorForm {
    DoctorForm {
        doc_name: doctor.doc_name.clone(),
        doc_spec: doctor.doc_spec.clone(),
        department_id: doctor.department_id.unwrap_or_default(),
        ..DoctorForm::default()
    }
}

#[component]
pub fn AdminDoctorsPage() -> impl IntoView {
    let session = use_session();
    let doctors = RwSignal::new(Vec::<DoctorSummary>::new());
    let departments = RwSignal::new(Vec::<Department>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);
    // `Some(None)` = creating, `Some(Some(id))` = editing.
    let editing = RwSignal::new(None::<Option<i64>>);
    let form = RwSignal::new(DoctorForm::default());

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_doctors(None, None).await {
                Ok(list) => doctors.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(list) = crate::net::api::list_departments().await {
            departments.set(list);
        }
    });

    let open_create = move |_| {
        form.set(DoctorForm::default());
        editing.set(Some(None));
    };
    let open_edit = move |doctor: DoctorSummary| {
        form.set(form_for(&doctor));
        editing.set(Some(Some(doctor.id)));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = editing.get() else {
            return;
        };
        let body = form.get();
        if let Err(message) = validate(&body, target.is_none()) {
            notice.set(Some((false, message.to_owned())));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(id) => crate::net::api::update_doctor(id, &body).await,
                None => crate::net::api::create_doctor(&body).await,
            };
            match result {
                Ok(_) => {
                    let message = if target.is_some() {
                        "Doctor updated successfully! All changes have been saved."
                    } else {
                        "Doctor created successfully! They can now login with their credentials."
                    };
                    notice.set(Some((true, message.to_owned())));
                    editing.set(None);
                    reload();
                }
                Err(e) => {
                    let lines = error_lines(&e).join("\n");
                    let _ = absorb_error(session, e);
                    notice.set(Some((false, lines)));
                }
            }
        });
    };

    let remove = move |id: i64, name: String| {
        if !dialog::confirm(&super::departments::delete_prompt(&name)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_doctor(id).await {
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
        <AdminLayout title="Doctors">
            <Notice notice=notice/>
            <div class="toolbar">
                <button class="btn btn-primary" on:click=open_create>"Add Doctor"</button>
            </div>
            <Show when=move || editing.get().is_some()>
                <form class="card form" on:submit=on_save>
                    <h2>{move || if matches!(editing.get(), Some(Some(_))) { "Edit Doctor" } else { "New Doctor" }}</h2>
                    <label class="form-label">"Name"</label>
                    <input
                        class="form-input"
                        prop:value=move || form.with(|f| f.doc_name.clone())
                        on:input=move |ev| form.update(|f| f.doc_name = event_target_value(&ev))
                    />
                    <label class="form-label">"Specialization"</label>
                    <input
                        class="form-input"
                        prop:value=move || form.with(|f| f.doc_spec.clone())
                        on:input=move |ev| form.update(|f| f.doc_spec = event_target_value(&ev))
                    />
                    <label class="form-label">"Department"</label>
                    <select
                        class="form-input"
                        on:change=move |ev| form.update(|f| f.department_id = event_target_value(&ev).parse().unwrap_or(0))
                    >
                        <option value="0">"Select department"</option>
                        <For each=move || departments.get() key=|d| d.id let:dep>
                            <option
                                value=dep.id.to_string()
                                selected=move || form.with(|f| f.department_id == dep.id)
                            >
                                {dep.dep_name.clone()}
                            </option>
                        </For>
                    </select>
                    <fieldset class="form-fieldset">
                        <legend>"Login account"</legend>
                        <input
                            class="form-input"
                            placeholder="Username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </fieldset>
                    <div class="form-actions">
                        <button class="btn btn-primary" type="submit">"Save"</button>
                        <button class="btn btn-outline" type="button" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Specialization"</th>
                            <th>"Department"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || doctors.get() key=|d| (d.id, d.doc_name.clone(), d.doc_spec.clone()) let:doctor>
                            <tr>
                                <td>{doctor.doc_name.clone()}</td>
                                <td>{doctor.doc_spec.clone()}</td>
                                <td>{doctor.department_name.clone()}</td>
                                <td class="table__actions">
                                    <button
                                        class="btn btn-sm"
                                        on:click={
                                            let doctor = doctor.clone();
                                            move |_| open_edit(doctor.clone())
                                        }
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-sm btn-danger"
                                        on:click={
                                            let name = doctor.doc_name.clone();
                                            move |_| remove(doctor.id, name.clone())
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
