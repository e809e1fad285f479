//! Public contact form. Works signed out.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use clinic::ApiError;
use leptos::prelude::*;

use crate::net::types::ContactForm;

pub(crate) const SENT: &str = "Thank you for your message! We will get back to you soon.";

/// Checks that do not need the server.
pub(crate) fn validate(form: &ContactForm) -> Result<(), &'static str> {
    let filled = [&form.name, &form.email, &form.subject, &form.message].iter().all(|f| !f.trim().is_empty());
    if !filled {
        return Err("Please fill in every field.");
    }
    if !form.email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

/// Every server field message on one line; other failures use their text.
pub(crate) fn failure_message(err: &ApiError) -> String {
    match err.fields() {
        Some(fields) if !fields.is_empty() => {
            fields.iter().flat_map(|(_, messages)| messages.iter().map(String::as_str)).collect::<Vec<_>>().join(", ")
        }
        _ => err.to_string(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<(bool, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = form.get();
        if let Err(message) = validate(&body) {
            notice.set(Some((false, message.to_owned())));
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&body).await {
                Ok(_) => {
                    form.set(ContactForm::default());
                    notice.set(Some((true, SENT.to_owned())));
                }
                Err(e) => notice.set(Some((false, failure_message(&e)))),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="page contact-page">
            <h1>"Get in Touch"</h1>
            <p class="page__lead">"Have questions or need assistance? Our team is here to help."</p>
            {move || {
                notice
                    .get()
                    .map(|(ok, text)| {
                        let class = if ok { "alert alert-success" } else { "alert alert-error" };
                        view! { <div class=class>{text}</div> }
                    })
            }}
            <form class="card form" on:submit=on_submit>
                <label class="form-label">"Name"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <label class="form-label">"Email"</label>
                <input
                    class="form-input"
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <label class="form-label">"Subject"</label>
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                />
                <label class="form-label">"Message"</label>
                <textarea
                    class="form-input"
                    rows="5"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}
