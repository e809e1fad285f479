//! Route wrapper applying the guard decision to the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` view in `app` is wrapped in [`Guarded`]. The decision is
//! re-evaluated whenever the session signal or the location changes, so a
//! session that resolves, expires or signs out re-routes without any page
//! having to watch auth state itself.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use clinic::guard::{Decision, evaluate, redirect_for};
use clinic::route::PATIENT_HOME;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::Loading;
use crate::state::auth::use_session;

/// Path plus query string, the form a remembered path is stored in.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Render `children` only when the guard allows the current route.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let path = Memo::new(move |_| full_path(&location.pathname.get(), &location.search.get()));
    let decision = Memo::new(move |_| path.with(|p| session.with(|s| evaluate(s, p))));

    move || match decision.get() {
        Decision::Render => children().into_any(),
        Decision::ShowLoading => view! { <Loading/> }.into_any(),
        _ => {
            let target = path
                .with_untracked(|p| session.with_untracked(|s| redirect_for(s, p)))
                .unwrap_or_else(|| PATIENT_HOME.to_owned());
            log::debug!("guard redirect -> {target}");
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=target options=options/> }.into_any()
        }
    }
}
