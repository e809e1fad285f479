//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<Session>`. Route guards and role-aware
//! components read it; only the Session Store built here writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use clinic::{ApiError, Session, SessionSlot, SessionStore};
use leptos::prelude::*;

use crate::net::auth::HttpAuthBackend;
use crate::util::token_storage::BrowserTokens;

/// [`SessionSlot`] over the shared session signal.
///
/// Reads are untracked: the store runs inside async tasks, not reactive scopes.
#[derive(Clone, Copy, Debug)]
pub struct SignalSlot(pub RwSignal<Session>);

impl SessionSlot for SignalSlot {
    fn get(&self) -> Session {
        self.0.get_untracked()
    }

    fn set(&self, session: Session) {
        self.0.set(session);
    }
}

pub type BrowserSessionStore = SessionStore<HttpAuthBackend, BrowserTokens, SignalSlot>;

/// Session Store bound to `session`, browser storage and the REST backend.
pub fn session_store(session: RwSignal<Session>) -> BrowserSessionStore {
    SessionStore::new(HttpAuthBackend, BrowserTokens, SignalSlot(session))
}

/// The session signal provided by `App`.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Route a resource-call failure through the store so an expired token ends
/// the session; returns the text to show inline.
pub fn absorb_error(session: RwSignal<Session>, err: ApiError) -> String {
    session_store(session).absorb(err).to_string()
}
