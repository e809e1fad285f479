//! Authenticated identity and role resolution.
//!
//! DESIGN
//! ======
//! The backend describes a user with two booleans (`is_superuser`,
//! `is_staff`) and, on some deployments, an optional `role` string. Every
//! authorization decision goes through [`resolve_role`] so the precedence
//! Admin > Doctor > Patient is fixed in exactly one place.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Effective authorization role of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// Landing page for this role. Always a page the role may render.
    #[must_use]
    pub fn home(self) -> &'static str {
        match self {
            Self::Admin => crate::route::ADMIN_HOME,
            Self::Doctor => crate::route::DOCTOR_HOME,
            Self::Patient => crate::route::PATIENT_HOME,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
            Self::Admin => "Administrator",
        }
    }
}

/// The authenticated user as returned by `GET /auth/profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend primary key.
    pub id: i64,
    /// Login name.
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Superusers are administrators regardless of any other field.
    #[serde(default)]
    pub is_superuser: bool,
    /// Staff accounts that are not superusers are doctors.
    #[serde(default)]
    pub is_staff: bool,
    /// Role string some backends send alongside the flags. Informational only;
    /// the flags are authoritative. Unknown values read as `None`.
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
}

impl Identity {
    /// Effective role; shorthand for [`resolve_role`].
    #[must_use]
    pub fn role(&self) -> Role {
        resolve_role(self)
    }

    /// Full name when the profile has one, else the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        match (first.is_empty(), last.is_empty()) {
            (true, true) => self.username.clone(),
            (false, true) => first.to_owned(),
            (true, false) => last.to_owned(),
            (false, false) => format!("{first} {last}"),
        }
    }
}

fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| Role::deserialize(value).ok()))
}

/// Resolve the effective role of `identity`.
///
/// `is_superuser` wins over everything; `is_staff` alone means doctor; with
/// neither flag set the user is a patient.
#[must_use]
pub fn resolve_role(identity: &Identity) -> Role {
    if identity.is_superuser {
        Role::Admin
    } else if identity.is_staff {
        Role::Doctor
    } else {
        Role::Patient
    }
}
