//! Card summarizing one doctor, with a booking link.

use clinic::format::{initials, truncate};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::DoctorSummary;

const SPECIALTY_PREVIEW_CHARS: usize = 80;

#[component]
pub fn DoctorCard(doctor: DoctorSummary) -> impl IntoView {
    let href = format!("/booking/{}", doctor.id);
    let avatar = match doctor.doc_image_url.clone().filter(|url| !url.is_empty()) {
        Some(url) => view! { <img class="doctor-card__photo" src=url alt=doctor.doc_name.clone()/> }.into_any(),
        None => view! { <span class="doctor-card__initials">{initials(&doctor.doc_name)}</span> }.into_any(),
    };
    let status = doctor.current_status.clone();

    view! {
        <article class="doctor-card">
            {avatar}
            <h3 class="doctor-card__name">{doctor.doc_name.clone()}</h3>
            <p class="doctor-card__department">{doctor.department_name.clone()}</p>
            <p class="doctor-card__spec">{truncate(&doctor.doc_spec, SPECIALTY_PREVIEW_CHARS)}</p>
            {status.map(|s| view! { <span class="doctor-card__status">{s}</span> })}
            <A href=href attr:class="btn btn-primary">"Book Appointment"</A>
        </article>
    }
}
