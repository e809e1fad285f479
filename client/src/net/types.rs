//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend serializers verbatim (including its
//! `dep_decription` spelling) so serde stays a straight mapping. Types the
//! access-control core also needs (`Identity`, slot listings, booking status)
//! live in `clinic` and are re-exported here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use clinic::Identity;
pub use clinic::booking::{BookingRequest, Slot, SlotAvailability, WorkingHours};
pub use clinic::format::BookingStatus;
pub use clinic::store::{Credentials, ProfileUpdate, Registration};

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Page { results } | Self::Plain(results) => results,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub dep_name: String,
    #[serde(rename = "dep_decription", default)]
    pub description: String,
    #[serde(default)]
    pub doctor_count: u32,
}

/// Create/update body for departments.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DepartmentForm {
    pub dep_name: String,
    #[serde(rename = "dep_decription")]
    pub description: String,
}

/// Weekly working window. `day` is 0 = Monday .. 6 = Sunday.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub id: i64,
    pub day: u8,
    #[serde(default)]
    pub day_display: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvailabilityForm {
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub reason: String,
    /// Present on the admin-wide leave listing.
    #[serde(default)]
    pub doctor_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeaveForm {
    pub date: String,
    pub reason: String,
}

/// Doctor as shown in lists and cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: i64,
    pub doc_name: String,
    pub doc_spec: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub doc_image_url: Option<String>,
    #[serde(default)]
    pub current_status: Option<String>,
    #[serde(default)]
    pub availabilities: Vec<Availability>,
}

/// Doctor detail, used by the booking page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorDetail {
    pub id: i64,
    pub doc_name: String,
    pub doc_spec: String,
    pub department: Department,
    #[serde(default)]
    pub doc_image_url: Option<String>,
    #[serde(default)]
    pub current_status: Option<String>,
    #[serde(default)]
    pub availabilities: Vec<Availability>,
    #[serde(default)]
    pub leaves: Vec<Leave>,
}

/// Admin create form; creating a doctor also creates their login.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DoctorForm {
    pub doc_name: String,
    pub doc_spec: String,
    pub department_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: i64,
    #[serde(default)]
    pub p_name: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Owning account id.
    #[serde(default)]
    pub user: Option<i64>,
    pub booking_date: String,
    #[serde(default)]
    pub appointment_time: Option<String>,
    pub status: BookingStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `{ "message": ... }` acknowledgement some mutations return.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Role-shaped payload of `GET /dashboard/stats/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardStats {
    Admin(AdminStats),
    Doctor(DoctorStats),
    Patient(PatientStats),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_doctors: u32,
    pub total_departments: u32,
    pub total_bookings: u32,
    pub pending_bookings: u32,
    pub accepted_bookings: u32,
    pub total_patients: u32,
    pub unread_contacts: u32,
    pub today_bookings: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorStats {
    pub doctor_name: String,
    pub department: String,
    pub total_appointments: u32,
    pub pending_appointments: u32,
    pub accepted_appointments: u32,
    pub today_appointments: u32,
    pub upcoming_appointments: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientStats {
    pub total_bookings: u32,
    pub pending_bookings: u32,
    pub accepted_bookings: u32,
    pub upcoming_bookings: u32,
}
