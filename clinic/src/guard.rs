//! Route guard: a pure decision over (session, route class, path).
//!
//! DESIGN
//! ======
//! The guard holds no state of its own. Rules are evaluated in a fixed order
//! and the first match wins, because several can hold at once (an admin on
//! `/login` is both "authenticated" and "outside the admin area"):
//!
//! 1. session still loading: show a loading placeholder
//! 2. auth-only page: bounce signed-in users to their role home
//! 3. signed out on a protected page: go to login
//! 4. admin outside the admin area: go to admin home
//! 5. doctor on a patient page: go to doctor home
//! 6. non-admin on an admin page: go to patient home
//! 7. patient on a doctor page: go to patient home
//! 8. otherwise render
//!
//! Unclassified paths are fail-closed: signed-out users go to login and
//! signed-in users go to their role home.
//!
//! Every redirect target is a role home or the login page, and each of those
//! renders for the identity that was redirected there, so a redirect can never
//! chain into another redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::{Identity, Role};
use crate::route::{self, RouteClass};
use crate::session::Session;

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    ShowLoading,
    /// Go to the login page; `return_to` is the path to resume after sign-in.
    RedirectToLogin { return_to: Option<String> },
    RedirectToAdminHome,
    RedirectToDoctorHome,
    RedirectToPatientHome,
}

impl Decision {
    fn home_of(role: Role) -> Self {
        match role {
            Role::Admin => Self::RedirectToAdminHome,
            Role::Doctor => Self::RedirectToDoctorHome,
            Role::Patient => Self::RedirectToPatientHome,
        }
    }

    /// Target URL for redirect decisions; `None` for render/loading.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Render | Self::ShowLoading => None,
            Self::RedirectToLogin { return_to } => Some(route::login_href(return_to.as_deref())),
            Self::RedirectToAdminHome => Some(route::ADMIN_HOME.to_owned()),
            Self::RedirectToDoctorHome => Some(route::DOCTOR_HOME.to_owned()),
            Self::RedirectToPatientHome => Some(route::PATIENT_HOME.to_owned()),
        }
    }
}

/// Classify `path` and decide. This is what the UI calls on navigation.
#[must_use]
pub fn evaluate(session: &Session, path: &str) -> Decision {
    decide(session, route::classify(path), path)
}

/// Decide what to do with a navigation to `path`, classified as `class`.
#[must_use]
pub fn decide(session: &Session, class: RouteClass, path: &str) -> Decision {
    if session.loading {
        return Decision::ShowLoading;
    }

    let role = session.role();

    if class == RouteClass::AuthOnly {
        return role.map_or(Decision::Render, Decision::home_of);
    }

    let Some(role) = role else {
        if class.requires_identity() {
            return Decision::RedirectToLogin { return_to: remembered_path(class, path) };
        }
        return Decision::Render;
    };

    if role == Role::Admin && !route::is_admin_area(path) && class != RouteClass::AdminOnly {
        return Decision::RedirectToAdminHome;
    }

    match (class, role) {
        (RouteClass::PatientOnly, Role::Doctor) => Decision::RedirectToDoctorHome,
        (RouteClass::AdminOnly, Role::Doctor | Role::Patient) | (RouteClass::DoctorOnly, Role::Patient) => {
            Decision::RedirectToPatientHome
        }
        (RouteClass::Unclassified, _) => Decision::home_of(role),
        _ => Decision::Render,
    }
}

/// Target URL for navigating to `path`, or `None` when it renders or waits.
///
/// Same as [`evaluate`] plus one refinement: a signed-in user sitting on an
/// auth page (which is how a fresh login looks) goes to
/// [`post_login_target`] with the page's `next` parameter rather than
/// straight home.
#[must_use]
pub fn redirect_for(session: &Session, path: &str) -> Option<String> {
    let class = route::classify(path);
    let decision = decide(session, class, path);
    match (&decision, class, session.identity.as_ref()) {
        (Decision::Render | Decision::ShowLoading, _, _) => None,
        (_, RouteClass::AuthOnly, Some(identity)) => {
            Some(post_login_target(identity, route::next_param(path).as_deref()))
        }
        _ => decision.redirect_target(),
    }
}

/// Where to send `identity` right after a successful login.
///
/// Admins and doctors always land on their home. Patients resume `return_to`
/// when it is a same-site page they could render, else go home.
#[must_use]
pub fn post_login_target(identity: &Identity, return_to: Option<&str>) -> String {
    let role = identity.role();
    if role != Role::Patient {
        return role.home().to_owned();
    }
    return_to
        .filter(|path| route::is_local_path(path))
        .filter(|path| matches!(route::classify(path), RouteClass::Public | RouteClass::PatientOnly))
        .filter(|path| route::path_only(path) != route::PATIENT_HOME)
        .map_or_else(|| route::PATIENT_HOME.to_owned(), str::to_owned)
}

/// Only patient pages are worth returning to: auth pages would bounce, and
/// doctor/admin pages would be denied to most users who land on login.
fn remembered_path(class: RouteClass, path: &str) -> Option<String> {
    (class == RouteClass::PatientOnly && route::is_local_path(path)).then(|| path.to_owned())
}
