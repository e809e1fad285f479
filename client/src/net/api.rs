//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, proxied through the
//! host at `/api`.
//! Server-side (SSR): requests fail with [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 on an authenticated call
//! surfaces as `ApiError::SessionExpired`; pages hand that to
//! `state::auth::absorb_error`, which quietly signs the user out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use clinic::route::encode_query_value;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::*;
pub use clinic::ApiError;

/// Same-origin prefix the host proxies to the backend.
pub const API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

// =============================================================================
// PATHS
// =============================================================================

pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn detail_path(collection: &str, id: i64) -> String {
    format!("/{collection}/{id}/")
}

fn action_path(collection: &str, id: i64, action: &str) -> String {
    format!("/{collection}/{id}/{action}/")
}

fn doctors_query_path(search: Option<&str>, department_id: Option<i64>) -> String {
    let mut params = Vec::new();
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        params.push(format!("search={}", encode_query_value(term)));
    }
    if let Some(id) = department_id {
        params.push(format!("dep_name={id}"));
    }
    if params.is_empty() { "/doctors/".to_owned() } else { format!("/doctors/?{}", params.join("&")) }
}

fn available_slots_path(doctor_id: i64, date: &str) -> String {
    format!("/doctors/{doctor_id}/available_slots/?date={}", encode_query_value(date))
}

fn bookings_query_path(status: Option<BookingStatus>) -> String {
    match status {
        Some(status) => format!("/bookings/?status={}", status.as_str()),
        None => "/bookings/".to_owned(),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Turn a raw response into `T`, or the matching [`ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Status { status, message: format!("malformed response: {e}") })
}

/// Send one request and return `(status, body)`.
pub(crate) async fn send_raw(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
        let response = match body {
            Some(json) => builder.json(&json).map_err(network)?.send().await,
            None => builder.send().await,
        }
        .map_err(network)?;
        let status = response.status();
        let text = response.text().await.map_err(network)?;
        log::debug!("{verb:?} {url} -> {status}");
        Ok((status, text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body, bearer);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Authenticated JSON call using the stored access token.
async fn call<T: DeserializeOwned>(verb: Verb, path: &str, body: Option<&impl Serialize>) -> Result<T, ApiError> {
    let json = body
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| ApiError::Network(format!("could not encode request: {e}")))?;
    let token = crate::util::token_storage::stored_access_token();
    let (status, text) = send_raw(verb, path, json, token.as_deref()).await?;
    decode(status, &text)
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    call(Verb::Get, path, None::<&()>).await
}

async fn list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    get::<Listing<T>>(path).await.map(Listing::into_vec)
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    call(Verb::Post, path, Some(body)).await
}

async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    call(Verb::Put, path, Some(body)).await
}

async fn delete(path: &str) -> Result<(), ApiError> {
    call::<serde_json::Value>(Verb::Delete, path, None::<&()>).await.map(|_| ())
}

// =============================================================================
// DEPARTMENTS
// =============================================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_departments() -> Result<Vec<Department>, ApiError> {
    list("/departments/").await
}

/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn create_department(form: &DepartmentForm) -> Result<Department, ApiError> {
    post("/departments/", form).await
}

/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn update_department(id: i64, form: &DepartmentForm) -> Result<Department, ApiError> {
    put(&detail_path("departments", id), form).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_department(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("departments", id)).await
}

// =============================================================================
// DOCTORS
// =============================================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_doctors(search: Option<&str>, department_id: Option<i64>) -> Result<Vec<DoctorSummary>, ApiError> {
    list(&doctors_query_path(search, department_id)).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn get_doctor(id: i64) -> Result<DoctorDetail, ApiError> {
    get(&detail_path("doctors", id)).await
}

/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn create_doctor(form: &DoctorForm) -> Result<DoctorSummary, ApiError> {
    post("/doctors/", form).await
}

/// Account fields left blank are not changed.
///
/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn update_doctor(id: i64, form: &DoctorForm) -> Result<DoctorSummary, ApiError> {
    put(&detail_path("doctors", id), form).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_doctor(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("doctors", id)).await
}

/// Weekly availability of any doctor (public).
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn doctor_availability(doctor_id: i64) -> Result<Vec<Availability>, ApiError> {
    list(&action_path("doctors", doctor_id, "availability")).await
}

/// Upcoming leave days of any doctor (public).
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn doctor_leaves(doctor_id: i64) -> Result<Vec<Leave>, ApiError> {
    list(&action_path("doctors", doctor_id, "leaves")).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn available_slots(doctor_id: i64, date: &str) -> Result<SlotAvailability, ApiError> {
    get(&available_slots_path(doctor_id, date)).await
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// Bookings visible to the caller (own, doctor's, or all for admins).
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_bookings(status: Option<BookingStatus>) -> Result<Vec<BookingSummary>, ApiError> {
    list(&bookings_query_path(status)).await
}

/// # Errors
///
/// Slot conflicts and leave days come back as [`ApiError::Validation`].
pub async fn create_booking(request: &BookingRequest) -> Result<serde_json::Value, ApiError> {
    post("/bookings/", request).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn update_booking_status(id: i64, status: BookingStatus) -> Result<Ack, ApiError> {
    post(&action_path("bookings", id, "update_status"), &StatusUpdate { status }).await
}

/// # Errors
///
/// Closed bookings are rejected by the server with a 400.
pub async fn cancel_booking(id: i64) -> Result<Ack, ApiError> {
    post(&action_path("bookings", id, "cancel"), &serde_json::json!({})).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_booking(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("bookings", id)).await
}

// =============================================================================
// CONTACTS
// =============================================================================

/// Public contact form; works signed out.
///
/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn submit_contact(form: &ContactForm) -> Result<Ack, ApiError> {
    post("/contacts/", form).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_contacts() -> Result<Vec<ContactMessage>, ApiError> {
    list("/contacts/").await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn mark_contact_read(id: i64) -> Result<Ack, ApiError> {
    post(&action_path("contacts", id, "mark_read"), &serde_json::json!({})).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_contact(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("contacts", id)).await
}

// =============================================================================
// USERS
// =============================================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_users() -> Result<Vec<Identity>, ApiError> {
    list("/users/").await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("users", id)).await
}

// =============================================================================
// DOCTOR SCHEDULE
// =============================================================================

/// Weekly availability of the signed-in doctor.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_availability() -> Result<Vec<Availability>, ApiError> {
    list("/doctor-availability/").await
}

/// Create the window for `form.day`, or replace it when `existing` is set.
///
/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn save_availability(existing: Option<i64>, form: &AvailabilityForm) -> Result<Availability, ApiError> {
    match existing {
        Some(id) => put(&detail_path("doctor-availability", id), form).await,
        None => post("/doctor-availability/", form).await,
    }
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_availability(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("doctor-availability", id)).await
}

/// Leaves of the signed-in doctor, or every doctor's for admins.
///
/// # Errors
///
/// Propagates transport and status failures.
pub async fn list_leaves() -> Result<Vec<Leave>, ApiError> {
    list("/doctor-leaves/").await
}

/// # Errors
///
/// Field errors come back as [`ApiError::Validation`].
pub async fn create_leave(form: &LeaveForm) -> Result<Leave, ApiError> {
    post("/doctor-leaves/", form).await
}

/// # Errors
///
/// Propagates transport and status failures.
pub async fn delete_leave(id: i64) -> Result<(), ApiError> {
    delete(&detail_path("doctor-leaves", id)).await
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// # Errors
///
/// Propagates transport and status failures.
pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    get("/dashboard/stats/").await
}
