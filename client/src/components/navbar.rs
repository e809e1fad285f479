//! Top navigation bar.
//!
//! DESIGN
//! ======
//! Links depend only on the effective role: doctors and admins get their
//! workspace entry instead of the public site links, patients additionally
//! get "My Bookings". Auth screens show the brand alone.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use clinic::route::{self, RouteClass};
use clinic::{Role, classify};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::state::auth::{session_store, use_session};

const PUBLIC_LINKS: [(&str, &str); 5] =
    [("/", "Home"), ("/about", "About"), ("/doctors", "Doctors"), ("/departments", "Departments"), ("/contact", "Contact")];

/// `(href, label)` pairs for the navigation bar.
pub(crate) fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    match role {
        Some(Role::Admin) => vec![(route::ADMIN_HOME, "Admin Panel")],
        Some(Role::Doctor) => vec![(route::DOCTOR_HOME, "Dashboard")],
        Some(Role::Patient) => {
            let mut links = PUBLIC_LINKS.to_vec();
            links.push(("/my-bookings", "My Bookings"));
            links
        }
        None => PUBLIC_LINKS.to_vec(),
    }
}

/// Auth screens hide the navigation links.
pub(crate) fn shows_links(path: &str) -> bool {
    classify(path) != RouteClass::AuthOnly
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let links = move || {
        if !shows_links(&location.pathname.get()) {
            return Vec::new();
        }
        nav_links(session.with(clinic::Session::role))
    };
    let greeting = move || session.with(|s| s.identity.as_ref().map(|id| format!("Hello, {}", id.display_name())));

    let on_logout = move |_| {
        session_store(session).logout();
        navigate(route::PATIENT_HOME, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"City Hospital"</A>
            <div class="navbar__links">
                <For each=links key=|(href, _)| *href let:link>
                    <A href=link.0 attr:class="navbar__link">{link.1}</A>
                </For>
            </div>
            <div class="navbar__account">
                {move || match greeting() {
                    Some(text) => view! {
                        <span class="navbar__user">{text}</span>
                        <button class="btn btn-outline" on:click=on_logout.clone()>"Logout"</button>
                    }
                        .into_any(),
                    None => view! {
                        <A href=route::LOGIN attr:class="btn btn-outline">"Login"</A>
                        <A href="/register" attr:class="btn btn-primary">"Register"</A>
                    }
                        .into_any(),
                }}
            </div>
        </nav>
    }
}
