//! Process-local session: at most one identity plus a loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard on every navigation and written only by
//! [`crate::store::SessionStore`]. `loading` starts `true` so the guard can
//! tell "not yet known" apart from "known signed out".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::identity::{Identity, Role};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { identity: None, loading: true }
    }
}

impl Session {
    /// Fresh session at app start: no identity, still resolving.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved session with no signed-in user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { identity: None, loading: false }
    }

    /// Resolved session for `identity`.
    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        Self { identity: Some(identity), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Effective role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }
}
