//! Contact form inbox.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use clinic::format::{format_date, truncate};
use leptos::prelude::*;

use super::Notice;
use crate::components::admin_layout::AdminLayout;
use crate::components::loading::Loading;
use crate::net::types::ContactMessage;
use crate::state::auth::{absorb_error, use_session};
use crate::util::dialog;

const PREVIEW_CHARS: usize = 120;
pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this message?";

pub(crate) fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// `"3 total messages"`, with the unread count appended when non-zero.
pub(crate) fn inbox_summary(messages: &[ContactMessage]) -> String {
    match unread_count(messages) {
        0 => format!("{} total messages", messages.len()),
        unread => format!("{} total messages, {unread} unread", messages.len()),
    }
}

#[component]
pub fn AdminContactsPage() -> impl IntoView {
    let session = use_session();
    let messages = RwSignal::new(Vec::<ContactMessage>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<(bool, String)>);
    let opened = RwSignal::new(None::<i64>);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_contacts().await {
                Ok(list) => messages.set(list),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
            loading.set(false);
        });
    };
    reload();

    let open = move |id: i64, is_read: bool| {
        opened.set(Some(id));
        if is_read {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_contact_read(id).await {
                Ok(_) => messages.update(|list| {
                    if let Some(m) = list.iter_mut().find(|m| m.id == id) {
                        m.is_read = true;
                    }
                }),
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
    };

    let remove = move |id: i64| {
        if !dialog::confirm(DELETE_PROMPT) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_contact(id).await {
                Ok(()) => {
                    if opened.get_untracked() == Some(id) {
                        opened.set(None);
                    }
                    notice.set(Some((true, "Message deleted.".to_owned())));
                    reload();
                }
                Err(e) => notice.set(Some((false, absorb_error(session, e)))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <AdminLayout title="Contact Messages">
            <Notice notice=notice/>
            <p class="page-subtitle">{move || messages.with(|list| inbox_summary(list))}</p>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || messages.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No messages yet."</p> }
                >
                    <ul class="inbox">
                        <For each=move || messages.get() key=|m| (m.id, m.is_read) let:message>
                            <li
                                class=if message.is_read { "inbox__item" } else { "inbox__item inbox__item--unread" }
                                on:click=move |_| open(message.id, message.is_read)
                            >
                                <div class="inbox__head">
                                    <strong>{message.name.clone()}</strong>
                                    <span class="muted">{message.email.clone()}</span>
                                    <span class="muted">
                                        {message.submitted_at.as_deref().map(format_date).unwrap_or_default()}
                                    </span>
                                </div>
                                <div class="inbox__subject">{message.subject.clone()}</div>
                                {
                                    let full = message.message.clone();
                                    let preview = truncate(&message.message, PREVIEW_CHARS);
                                    move || if opened.get() == Some(message.id) { full.clone() } else { preview.clone() }
                                }
                                <button
                                    class="btn btn-sm btn-danger"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        remove(message.id);
                                    }
                                >
                                    "Delete"
                                </button>
                            </li>
                        </For>
                    </ul>
                </Show>
            </Show>
        </AdminLayout>
    }
}
