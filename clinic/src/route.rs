//! Static route classification table.
//!
//! Every navigable path maps to exactly one [`RouteClass`]. Paths the table
//! does not know are [`RouteClass::Unclassified`] and the guard treats them
//! fail-closed.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

pub const LOGIN: &str = "/login";
pub const ADMIN_HOME: &str = "/admin/dashboard";
pub const DOCTOR_HOME: &str = "/dashboard";
pub const PATIENT_HOME: &str = "/";

const ADMIN_AREA: &str = "/admin";

/// Authorization requirement attached to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Anyone, signed in or not.
    Public,
    /// Login/registration screens; signed-in users are bounced home.
    AuthOnly,
    PatientOnly,
    DoctorOnly,
    AdminOnly,
    /// Not in the table.
    Unclassified,
}

impl RouteClass {
    /// Whether the route needs a signed-in user.
    #[must_use]
    pub fn requires_identity(self) -> bool {
        matches!(self, Self::PatientOnly | Self::DoctorOnly | Self::AdminOnly | Self::Unclassified)
    }
}

/// Classify `path`. Query string, fragment and a trailing slash are ignored.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    let segments: Vec<&str> = path_only(path).split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] | ["about" | "doctors" | "departments" | "contact"] => RouteClass::Public,
        ["login" | "register" | "admin-login"] => RouteClass::AuthOnly,
        ["my-bookings"] | ["booking", _] => RouteClass::PatientOnly,
        ["dashboard"] => RouteClass::DoctorOnly,
        ["admin"]
        | ["admin", "dashboard" | "doctors" | "departments" | "bookings" | "leaves" | "users" | "contacts"] => {
            RouteClass::AdminOnly
        }
        _ => RouteClass::Unclassified,
    }
}

/// Whether `path` lies under `/admin` (the admin area, not `/admin-login`).
#[must_use]
pub fn is_admin_area(path: &str) -> bool {
    let path = path_only(path);
    path == ADMIN_AREA || path.strip_prefix(ADMIN_AREA).is_some_and(|rest| rest.starts_with('/'))
}

/// Login page URL carrying the path to return to after sign-in.
#[must_use]
pub fn login_href(return_to: Option<&str>) -> String {
    match return_to {
        Some(path) => format!("{LOGIN}?next={}", encode_query_value(path)),
        None => LOGIN.to_owned(),
    }
}

/// The `next` query parameter of `path`, decoded.
#[must_use]
pub fn next_param(path: &str) -> Option<String> {
    let query = path.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("next="))
        .map(decode_query_value)
        .filter(|value| !value.is_empty())
}

/// Strip query string and fragment.
pub(crate) fn path_only(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Whether `path` is a same-site absolute path (rejects `//host` and schemes).
pub(crate) fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Percent-encode `value` for use in a query string (`/` is left as-is).
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Inverse of [`encode_query_value`]; malformed escapes are kept literally.
#[must_use]
pub fn decode_query_value(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()));
                match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
