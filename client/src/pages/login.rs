//! Login screens: the regular patient/staff login and the admin portal.
//!
//! DESIGN
//! ======
//! A successful login only updates the session. The page is an auth-only
//! route, so `Guarded` notices the new identity and navigates to the
//! post-login target (including the `next` return path). The admin portal
//! additionally refuses non-admin accounts by signing them straight back out
//! before the guard re-evaluates.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use clinic::{Identity, Role};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::net::types::Credentials;
use crate::state::auth::{session_store, use_session};

pub(crate) const ADMIN_ONLY: &str = "Access denied. This login is for administrators only.";
pub(crate) const MISSING_FIELDS: &str = "Enter both username and password.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Portal {
    Standard,
    Admin,
}

/// Whether `identity` may finish signing in through `portal`.
pub(crate) fn admit(portal: Portal, identity: &Identity) -> Result<(), &'static str> {
    match portal {
        Portal::Admin if identity.role() != Role::Admin => Err(ADMIN_ONLY),
        _ => Ok(()),
    }
}

/// Trimmed credentials, or the prompt to show when a field is blank.
pub(crate) fn credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let notice = move || {
        query.with(|q| {
            if q.get_str("registered").is_some() {
                Some(crate::net::auth::REGISTERED)
            } else if q.get_str("next").is_some() {
                Some("Please log in to continue.")
            } else {
                None
            }
        })
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your appointments"</p>
                {move || notice().map(|text| view! { <div class="alert alert-info">{text}</div> })}
                <LoginForm portal=Portal::Standard/>
                <GoogleSignIn/>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <div class="auth-page auth-page--admin">
            <div class="card auth-card">
                <h1>"Admin Login"</h1>
                <p class="auth-card__subtitle">"Administrator access only"</p>
                <LoginForm portal=Portal::Admin/>
                <p class="auth-card__footer">
                    "Not an administrator? "
                    <A href="/login">"Go to regular login"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
fn LoginForm(portal: Portal) -> impl IntoView {
    let session = use_session();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match credentials(&username.get(), &password.get()) {
            Ok(creds) => creds,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session_store(session);
            match store.login(&creds).await {
                Ok(identity) => {
                    if let Err(message) = admit(portal, &identity) {
                        store.logout();
                        error.set(Some(message.to_owned()));
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (creds, session, portal);
    };

    let submit_label = move || match (busy.get(), portal) {
        (true, _) => "Logging in...",
        (false, Portal::Admin) => "Login as Admin",
        (false, Portal::Standard) => "Login",
    };

    view! {
        {move || error.get().map(|text| view! { <div class="alert alert-error">{text}</div> })}
        <form class="form" on:submit=on_submit>
            <label class="form-label">"Username"</label>
            <input
                class="form-input"
                type="text"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| {
                    username.set(event_target_value(&ev));
                    error.set(None);
                }
            />
            <label class="form-label">"Password"</label>
            <input
                class="form-input"
                type="password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| {
                    password.set(event_target_value(&ev));
                    error.set(None);
                }
            />
            <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}

/// Google button, rendered only when a client id is configured.
#[component]
fn GoogleSignIn() -> impl IntoView {
    use crate::util::google;

    let session = use_session();
    let error = RwSignal::new(None::<String>);

    google::install_callback(move |token| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = session_store(session).federated_login(&token).await {
                error.set(Some(e.to_string()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, session);
    });

    google::CLIENT_ID.map(|client_id| {
        view! {
            <div class="auth-card__divider">"or"</div>
            {move || error.get().map(|text| view! { <div class="alert alert-error">{text}</div> })}
            <script src="https://accounts.google.com/gsi/client" defer="defer"></script>
            <div id="g_id_onload" data-client_id=client_id data-callback=google::CALLBACK_NAME></div>
            <div class="g_id_signin" data-type="standard"></div>
        }
    })
}
