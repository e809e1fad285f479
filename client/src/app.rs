//! Root application component with routing and context providers.

use clinic::Session;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::components::loading::Loading;
use crate::components::navbar::Navbar;
use crate::pages::admin::{
    bookings::AdminBookingsPage, contacts::AdminContactsPage, dashboard::AdminDashboardPage,
    departments::AdminDepartmentsPage, doctors::AdminDoctorsPage, leaves::AdminLeavesPage, users::AdminUsersPage,
};
use crate::pages::{
    about::AboutPage, booking::BookingPage, contact::ContactPage, departments::DepartmentsPage,
    doctor_dashboard::DoctorDashboardPage, doctors::DoctorsPage, home::HomePage, login::AdminLoginPage,
    login::LoginPage, my_bookings::MyBookingsPage, register::RegisterPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal, starts the one-time profile load, and wraps
/// every route in [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // `Session::new()` starts in the loading state; guards show a spinner
    // until `load_user` settles it.
    let session = RwSignal::new(Session::new());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::session_store(session).load_user().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-ui.css"/>
        <Title text="City Hospital"/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| view! { <Guarded><Loading/></Guarded> }>
                    <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                    <Route path=StaticSegment("about") view=|| view! { <Guarded><AboutPage/></Guarded> }/>
                    <Route path=StaticSegment("doctors") view=|| view! { <Guarded><DoctorsPage/></Guarded> }/>
                    <Route
                        path=StaticSegment("departments")
                        view=|| view! { <Guarded><DepartmentsPage/></Guarded> }
                    />
                    <Route path=StaticSegment("contact") view=|| view! { <Guarded><ContactPage/></Guarded> }/>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route path=StaticSegment("register") view=|| view! { <Guarded><RegisterPage/></Guarded> }/>
                    <Route
                        path=StaticSegment("admin-login")
                        view=|| view! { <Guarded><AdminLoginPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("booking"), ParamSegment("doctor_id"))
                        view=|| view! { <Guarded><BookingPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("my-bookings")
                        view=|| view! { <Guarded><MyBookingsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded><DoctorDashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Guarded><Redirect path=clinic::route::ADMIN_HOME/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <Guarded><AdminDashboardPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("doctors"))
                        view=|| view! { <Guarded><AdminDoctorsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("departments"))
                        view=|| view! { <Guarded><AdminDepartmentsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("bookings"))
                        view=|| view! { <Guarded><AdminBookingsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("leaves"))
                        view=|| view! { <Guarded><AdminLeavesPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <Guarded><AdminUsersPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("contacts"))
                        view=|| view! { <Guarded><AdminContactsPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
