//! Sidebar shell shared by every `/admin/*` page.

use clinic::route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{session_store, use_session};

pub(crate) const ADMIN_SECTIONS: [(&str, &str); 7] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/doctors", "Doctors"),
    ("/admin/departments", "Departments"),
    ("/admin/bookings", "Bookings"),
    ("/admin/leaves", "Leaves"),
    ("/admin/users", "Users"),
    ("/admin/contacts", "Messages"),
];

#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let on_logout = move |_| {
        session_store(session).logout();
        navigate(route::LOGIN, NavigateOptions::default());
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <h2 class="admin-layout__brand">"Admin Panel"</h2>
                <nav class="admin-layout__nav">
                    {ADMIN_SECTIONS
                        .iter()
                        .map(|(href, label)| view! { <A href=*href attr:class="admin-layout__link">{*label}</A> })
                        .collect_view()}
                </nav>
                <button class="btn btn-outline admin-layout__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>
            <main class="admin-layout__content">
                <h1 class="admin-layout__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
