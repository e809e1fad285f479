//! Patient self-registration.
//!
//! Registration does not sign in; success lands on `/login?registered=1`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use clinic::ApiError;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Registration;
use crate::state::auth::{session_store, use_session};

pub(crate) const AFTER_REGISTER: &str = "/login?registered=1";

/// Message to show under `field`, if the last attempt failed on it.
pub(crate) fn field_message(error: Option<&ApiError>, field: &str) -> Option<String> {
    error.and_then(ApiError::fields).and_then(|fields| fields.first(field)).map(str::to_owned)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(Registration::default());
    let error = RwSignal::new(None::<ApiError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = form.get();
        if let Err(e) = registration.validate() {
            error.set(Some(e));
            return;
        }
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session_store(session).register(&registration).await {
                Ok(message) => {
                    log::info!("{message}");
                    navigate(AFTER_REGISTER, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (registration, navigate, session);
    };

    let field = move |name: &'static str| move || field_message(error.get().as_ref(), name);
    let banner = move || error.get().map(|e| view! { <div class="alert alert-error">{e.to_string()}</div> });

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Create an Account"</h1>
                {banner}
                <form class="form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label class="form-label">"First Name"</label>
                            <input
                                class="form-input"
                                type="text"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">"Last Name"</label>
                            <input
                                class="form-input"
                                type="text"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <label class="form-label">"Username"</label>
                    <input
                        class="form-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <p class="form-error">{field("username")}</p>
                    <label class="form-label">"Email"</label>
                    <input
                        class="form-input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <p class="form-error">{field("email")}</p>
                    <label class="form-label">"Password"</label>
                    <input
                        class="form-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <p class="form-error">{field("password")}</p>
                    <label class="form-label">"Confirm Password"</label>
                    <input
                        class="form-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password2.clone())
                        on:input=move |ev| form.update(|f| f.password2 = event_target_value(&ev))
                    />
                    <p class="form-error">{field("password2")}</p>
                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
