//! Error taxonomy for calls against the REST backend.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` carries exactly what a view needs to show the user. The Session
//! Store absorbs `SessionExpired` into a signed-out session; resource views
//! render the `Display` text inline and never touch routing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

const GENERIC_VALIDATION_MESSAGE: &str = "Please correct the highlighted fields.";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Credentials rejected; the message comes from the server when it sends one.
    #[error("{0}")]
    Auth(String),
    /// The access token is no longer accepted (HTTP 401 on an authenticated call).
    #[error("your session has expired, please log in again")]
    SessionExpired,
    /// Malformed submission; field messages are shown verbatim.
    #[error("{}", .0.summary().unwrap_or(GENERIC_VALIDATION_MESSAGE))]
    Validation(FieldErrors),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Map a non-success HTTP response to an error.
    ///
    /// 401 means the bearer token was refused, 400 carries field errors, and
    /// anything else keeps the server's `detail`/`error` text if present.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => Self::SessionExpired,
            400 => Self::Validation(FieldErrors::from_body(body)),
            _ => Self::Status { status, message: server_message(body).unwrap_or_else(|| "unexpected response".to_owned()) },
        }
    }

    /// Map a failed credential exchange (`/auth/login/`, `/auth/google/`).
    #[must_use]
    pub fn from_login_response(status: u16, body: &str, fallback: &str) -> Self {
        match status {
            400 | 401 | 403 => Self::Auth(server_message(body).unwrap_or_else(|| fallback.to_owned())),
            _ => Self::from_response(status, body),
        }
    }

    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Field errors when this is a validation failure.
    #[must_use]
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Per-field messages in the order the server sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message for `field`, appending if the field already has some.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if let Some((_, messages)) = self.0.iter_mut().find(|(name, _)| name == field) {
            messages.push(message);
        } else {
            self.0.push((field.to_owned(), vec![message]));
        }
    }

    /// Builder form of [`FieldErrors::push`].
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message for `field`.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    /// First message of the first field; what a one-line banner shows.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.0.iter().find_map(|(_, messages)| messages.first()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Parse a DRF-style error body: `{"field": ["msg", ...] | "msg", ...}`.
    ///
    /// A bare string or unparseable body becomes a single `non_field_errors`
    /// entry so nothing the server said is dropped.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let mut errors = Self::new();
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => {
                for (field, value) in map {
                    for message in flatten_messages(&value) {
                        errors.push(&field, message);
                    }
                }
            }
            Ok(Value::Array(items)) => {
                for message in items.iter().flat_map(flatten_messages) {
                    errors.push("non_field_errors", message);
                }
            }
            Ok(Value::String(message)) => errors.push("non_field_errors", message),
            _ => {
                let trimmed = body.trim();
                if !trimmed.is_empty() {
                    errors.push("non_field_errors", trimmed);
                }
            }
        }
        errors
    }
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(message) => vec![message.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// `detail` or `error` text from a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_owned)
}
