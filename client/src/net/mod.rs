//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles resource calls, `auth` implements the Session Store's
//! backend seam over the same transport, and `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod types;
