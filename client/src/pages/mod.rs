//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped data loading and delegates shared chrome
//! to `components`. Pages never check auth themselves; `Guarded` has already
//! decided they may render.

pub mod about;
pub mod admin;
pub mod booking;
pub mod contact;
pub mod departments;
pub mod doctor_dashboard;
pub mod doctors;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod register;
