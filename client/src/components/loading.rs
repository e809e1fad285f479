//! Full-page placeholder shown while the session is still resolving.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner" aria-hidden="true"></div>
            <p class="loading__text">{message}</p>
        </div>
    }
}
