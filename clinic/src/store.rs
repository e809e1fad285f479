//! Session Store: the only writer of [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is generic over three seams so the same logic runs in the
//! browser and in tests:
//!
//! - [`AuthBackend`]: the remote auth API (login, refresh, profile, ...)
//! - [`TokenStore`]: durable access/refresh token slots
//! - [`SessionSlot`]: where the current [`Session`] lives (a reactive signal
//!   in the UI, a `RefCell` in tests)
//!
//! ERROR HANDLING
//! ==============
//! `load_user` never fails; `logout` never fails. `login`, `refresh` and the
//! profile operations return [`ApiError`] for the caller to show, and leave
//! the session signed out whenever the credentials turn out to be unusable.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};
use crate::identity::Identity;
use crate::session::Session;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Username + password pair posted to `/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token pair returned by `/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Result of a federated (third-party) sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedLogin {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<Identity>,
}

/// New-account form posted to `/auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    /// Checks that do not need the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] listing every failed field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.push("username", "Username is required.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
        }
        if self.password != self.password2 {
            errors.push("password", "Passwords don't match.");
        }
        if errors.is_empty() { Ok(()) } else { Err(ApiError::Validation(errors)) }
    }
}

/// Editable profile fields sent with `PUT /auth/profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// SEAMS
// =============================================================================

/// Remote auth API.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange credentials for a token pair.
    async fn obtain_tokens(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// Exchange a refresh token for a new access token.
    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ApiError>;

    /// Fetch the profile of the user owning `access_token`.
    async fn fetch_profile(&self, access_token: &str) -> Result<Identity, ApiError>;

    /// Replace editable profile fields.
    async fn update_profile(&self, access_token: &str, update: &ProfileUpdate) -> Result<Identity, ApiError>;

    /// Create an account; returns the server's confirmation message.
    async fn register(&self, registration: &Registration) -> Result<String, ApiError>;

    /// Exchange a third-party identity token for a token pair.
    async fn federated_login(&self, provider_token: &str) -> Result<FederatedLogin, ApiError>;
}

/// Durable token slots.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn set_refresh_token(&self, token: &str);
    fn clear(&self);

    fn store_pair(&self, access: &str, refresh: &str) {
        self.set_access_token(access);
        self.set_refresh_token(refresh);
    }
}

/// Holder of the current session.
pub trait SessionSlot {
    fn get(&self) -> Session;
    fn set(&self, session: Session);
}

impl SessionSlot for Rc<RefCell<Session>> {
    fn get(&self) -> Session {
        self.borrow().clone()
    }

    fn set(&self, session: Session) {
        *self.borrow_mut() = session;
    }
}

/// In-memory [`TokenStore`], for tests and for hosts without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    access: Rc<RefCell<Option<String>>>,
    refresh: Rc<RefCell<Option<String>>>,
}

impl MemoryTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access.borrow_mut() = Some(token.to_owned());
    }

    fn set_refresh_token(&self, token: &str) {
        *self.refresh.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.access.borrow_mut().take();
        self.refresh.borrow_mut().take();
    }
}

// =============================================================================
// STORE
// =============================================================================

pub struct SessionStore<B, T, S> {
    backend: B,
    tokens: T,
    slot: S,
}

impl<B, T, S> SessionStore<B, T, S>
where
    B: AuthBackend,
    T: TokenStore,
    S: SessionSlot,
{
    pub fn new(backend: B, tokens: T, slot: S) -> Self {
        Self { backend, tokens, slot }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.slot.get()
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Sign in with username and password.
    ///
    /// On success the tokens are persisted, the profile is loaded and the
    /// session is signed in before this returns, so the caller can route on
    /// the returned identity straight away.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] for rejected credentials; any profile failure after
    /// the token exchange clears the tokens and is returned as-is.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let pair = self.backend.obtain_tokens(credentials).await.inspect_err(|e| {
            log::warn!("login rejected for {}: {e}", credentials.username);
        })?;
        self.tokens.store_pair(&pair.access, &pair.refresh);
        self.adopt_profile(&pair.access).await
    }

    /// Sign in with a third-party identity token.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::login`].
    pub async fn federated_login(&self, provider_token: &str) -> Result<Identity, ApiError> {
        let login = self.backend.federated_login(provider_token).await?;
        self.tokens.store_pair(&login.access, &login.refresh);
        match login.user {
            Some(identity) => {
                log::info!("federated login for {}", identity.username);
                self.slot.set(Session::signed_in(identity.clone()));
                Ok(identity)
            }
            None => self.adopt_profile(&login.access).await,
        }
    }

    /// Drop tokens and identity. Never fails.
    pub fn logout(&self) {
        self.tokens.clear();
        self.slot.set(Session::signed_out());
        log::info!("signed out");
    }

    /// Resolve the session at start-up from persisted tokens.
    ///
    /// A refused token (401) signs out; any other failure leaves the session
    /// empty. Either way `loading` ends `false`.
    pub async fn load_user(&self) {
        let Some(access) = self.tokens.access_token() else {
            self.slot.set(Session::signed_out());
            return;
        };
        match self.backend.fetch_profile(&access).await {
            Ok(identity) => {
                log::debug!("restored session for {}", identity.username);
                self.slot.set(Session::signed_in(identity));
            }
            Err(ApiError::SessionExpired) => {
                log::warn!("stored session expired");
                self.logout();
            }
            Err(e) => {
                log::warn!("profile load failed: {e}");
                self.slot.set(Session::signed_out());
            }
        }
    }

    /// Trade the refresh token for a new access token and reload the profile.
    ///
    /// # Errors
    ///
    /// Any failure signs out and is returned; a missing refresh token is
    /// [`ApiError::SessionExpired`].
    pub async fn refresh(&self) -> Result<Identity, ApiError> {
        let previous = self.slot.get();
        self.slot.set(Session { loading: true, ..previous });

        let Some(refresh_token) = self.tokens.refresh_token() else {
            self.logout();
            return Err(ApiError::SessionExpired);
        };
        let result: Result<Identity, ApiError> = async {
            let access = self.backend.refresh_access(&refresh_token).await?;
            self.tokens.set_access_token(&access);
            self.backend.fetch_profile(&access).await
        }
        .await;

        match result {
            Ok(identity) => {
                self.slot.set(Session::signed_in(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                log::warn!("token refresh failed: {e}");
                self.logout();
                Err(e)
            }
        }
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] from local checks or from the server.
    pub async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        registration.validate()?;
        self.backend.register(registration).await
    }

    /// Update the signed-in user's profile and the session identity.
    ///
    /// # Errors
    ///
    /// [`ApiError::SessionExpired`] when nobody is signed in or the token was
    /// refused (the session is then signed out); otherwise the server error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        let Some(access) = self.tokens.access_token() else {
            return Err(ApiError::SessionExpired);
        };
        match self.backend.update_profile(&access, update).await {
            Ok(identity) => {
                self.slot.set(Session::signed_in(identity.clone()));
                Ok(identity)
            }
            Err(e) => Err(self.absorb(e)),
        }
    }

    /// Sign out when `err` says the session is gone; hand the error back.
    ///
    /// Resource calls route their failures through here so an expired token
    /// during normal use quietly ends the session.
    pub fn absorb(&self, err: ApiError) -> ApiError {
        if err.is_session_expired() {
            self.logout();
        }
        err
    }

    async fn adopt_profile(&self, access: &str) -> Result<Identity, ApiError> {
        match self.backend.fetch_profile(access).await {
            Ok(identity) => {
                log::info!("signed in as {} ({:?})", identity.username, identity.role());
                self.slot.set(Session::signed_in(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                self.tokens.clear();
                self.slot.set(Session::signed_out());
                Err(e)
            }
        }
    }
}
