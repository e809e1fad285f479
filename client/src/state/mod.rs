//! Reactive application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only app-wide state is the session signal; resource views keep their
//! own page-local signals.

pub mod auth;
