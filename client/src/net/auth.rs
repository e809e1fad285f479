//! `AuthBackend` over the `/auth/*` REST endpoints.
//!
//! DESIGN
//! ======
//! The Session Store passes tokens explicitly, so these calls never read
//! browser storage themselves. Credential exchanges map rejections through
//! [`ApiError::from_login_response`] so a wrong password reads as an auth
//! failure rather than an expired session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use async_trait::async_trait;
use clinic::store::{FederatedLogin, TokenPair};
use clinic::{ApiError, AuthBackend};
use serde::Deserialize;

use super::api::{Verb, decode, send_raw};
use super::types::{Credentials, Identity, ProfileUpdate, Registration};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const FEDERATED_LOGIN_FAILED: &str = "Google Login failed";
pub const REGISTERED: &str = "User registered successfully! You can now login.";

#[derive(Deserialize)]
struct AccessToken {
    access: String,
}

#[derive(Deserialize)]
struct RegisterReply {
    #[serde(default)]
    message: Option<String>,
}

/// Backend half of the browser Session Store.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

pub(crate) fn decode_login<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        decode(status, body)
    } else {
        Err(ApiError::from_login_response(status, body, fallback))
    }
}

pub(crate) fn registration_message(status: u16, body: &str) -> Result<String, ApiError> {
    let reply: RegisterReply = decode(status, body)?;
    Ok(reply.message.unwrap_or_else(|| REGISTERED.to_owned()))
}

fn encode(value: &impl serde::Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Network(format!("could not encode request: {e}")))
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn obtain_tokens(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let (status, body) = send_raw(Verb::Post, "/auth/login/", Some(encode(credentials)?), None).await?;
        decode_login(status, &body, LOGIN_FAILED)
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ApiError> {
        let payload = serde_json::json!({ "refresh": refresh_token });
        let (status, body) = send_raw(Verb::Post, "/auth/refresh/", Some(payload), None).await?;
        // A refused refresh token is an expired session regardless of status.
        if matches!(status, 400 | 401 | 403) {
            return Err(ApiError::SessionExpired);
        }
        decode::<AccessToken>(status, &body).map(|t| t.access)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<Identity, ApiError> {
        let (status, body) = send_raw(Verb::Get, "/auth/profile/", None, Some(access_token)).await?;
        decode(status, &body)
    }

    async fn update_profile(&self, access_token: &str, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        let (status, body) = send_raw(Verb::Put, "/auth/profile/", Some(encode(update)?), Some(access_token)).await?;
        decode(status, &body)
    }

    async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        let (status, body) = send_raw(Verb::Post, "/auth/register/", Some(encode(registration)?), None).await?;
        registration_message(status, &body)
    }

    async fn federated_login(&self, provider_token: &str) -> Result<FederatedLogin, ApiError> {
        let payload = serde_json::json!({ "token": provider_token });
        let (status, body) = send_raw(Verb::Post, "/auth/google/", Some(payload), None).await?;
        decode_login(status, &body, FEDERATED_LOGIN_FAILED)
    }
}
