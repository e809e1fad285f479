//! Landing page: hero plus department and doctor teasers.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::doctor_card::DoctorCard;
use crate::net::types::{Department, DoctorSummary};

const FEATURED_DEPARTMENTS: usize = 6;
const FEATURED_DOCTORS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let departments = RwSignal::new(Vec::<Department>::new());
    let doctors = RwSignal::new(Vec::<DoctorSummary>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_departments().await {
            Ok(mut list) => {
                list.truncate(FEATURED_DEPARTMENTS);
                departments.set(list);
            }
            Err(e) => log::warn!("home departments: {e}"),
        }
        match crate::net::api::list_doctors(None, None).await {
            Ok(mut list) => {
                list.truncate(FEATURED_DOCTORS);
                doctors.set(list);
            }
            Err(e) => log::warn!("home doctors: {e}"),
        }
    });

    view! {
        <section class="hero">
            <h1>"Your health, our priority"</h1>
            <p>"Book an appointment with the right specialist in a few clicks."</p>
            <div class="hero__actions">
                <A href="/doctors" attr:class="btn btn-primary">"Find a doctor"</A>
                <A href="/contact" attr:class="btn btn-outline">"Contact us"</A>
            </div>
        </section>
        <section class="page">
            <h2>"Departments"</h2>
            <div class="department-grid">
                <For each=move || departments.get() key=|d| d.id let:department>
                    <div class="card department-card">
                        <h3>{department.dep_name}</h3>
                        <p>{clinic::format::truncate(&department.description, 100)}</p>
                    </div>
                </For>
            </div>
            <A href="/departments" attr:class="link-more">"All departments"</A>
        </section>
        <section class="page">
            <h2>"Our doctors"</h2>
            <div class="doctor-grid">
                <For each=move || doctors.get() key=|d| d.id let:doctor>
                    <DoctorCard doctor=doctor/>
                </For>
            </div>
            <A href="/doctors" attr:class="link-more">"All doctors"</A>
        </section>
    }
}
