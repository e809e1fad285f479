//! Static "About us" page.

use leptos::prelude::*;
use leptos_router::components::A;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Experienced specialists", "Board-certified doctors across every major department."),
    ("Online booking", "Pick a doctor, a day and a free slot without calling the front desk."),
    ("Patient first", "Track, reschedule or cancel your appointments from one place."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about-page">
            <h1>"About City Hospital"</h1>
            <p class="page__lead">
                "We combine modern facilities with a team that has cared for our community for decades."
            </p>
            <div class="feature-grid">
                {HIGHLIGHTS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="card feature">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <A href="/doctors" attr:class="btn btn-primary">"Meet our doctors"</A>
        </section>
    }
}
