//! Browser `localStorage` persistence for the auth token pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens survive reloads so `load_user` can restore the session at start-up.
//! Reads and writes are hydrate-only; on the server every slot is empty and
//! writes are dropped, which keeps SSR output signed-out and deterministic.

use clinic::TokenStore;
use clinic::store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

/// Access token for authenticated resource calls.
pub fn stored_access_token() -> Option<String> {
    load(ACCESS_TOKEN_KEY)
}

fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        load(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        load(REFRESH_TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) {
        save(ACCESS_TOKEN_KEY, token);
    }

    fn set_refresh_token(&self, token: &str) {
        save(REFRESH_TOKEN_KEY, token);
    }

    fn clear(&self) {
        remove(ACCESS_TOKEN_KEY);
        remove(REFRESH_TOKEN_KEY);
    }
}
