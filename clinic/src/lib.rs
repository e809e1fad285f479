//! Shared access-control and session core for the appointment portal.
//!
//! This crate owns everything the UI layer needs to decide *who* is signed in
//! and *what* they may see, without depending on a UI framework or an HTTP
//! client. The `client` crate plugs browser storage and `gloo-net` into the
//! traits defined in [`store`]; tests plug in in-memory fakes.

pub mod booking;
pub mod error;
pub mod format;
pub mod guard;
pub mod identity;
pub mod route;
pub mod session;
pub mod store;

pub use error::{ApiError, FieldErrors};
pub use guard::{Decision, decide, evaluate, post_login_target, redirect_for};
pub use identity::{Identity, Role, resolve_role};
pub use route::{RouteClass, classify};
pub use session::Session;
pub use store::{AuthBackend, SessionSlot, SessionStore, TokenStore};
