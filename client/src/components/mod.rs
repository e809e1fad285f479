//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (navigation, admin shell, cards) and
//! the route guard wrapper, reading the session from Leptos context.

pub mod admin_layout;
pub mod doctor_card;
pub mod guard;
pub mod loading;
pub mod navbar;
pub mod stat_card;
pub mod status_badge;
