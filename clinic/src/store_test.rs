use super::*;
use crate::guard::{Decision, evaluate};

// =============================================================
// Fake backend
// =============================================================

#[derive(Default)]
struct FakeBackend {
    users: Vec<(String, String, Identity)>,
    profile_error: RefCell<Option<ApiError>>,
    refresh_error: Option<ApiError>,
    federated_user: Option<Identity>,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn with_user(mut self, username: &str, password: &str, identity: Identity) -> Self {
        self.users.push((username.to_owned(), password.to_owned(), identity));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn identity_for_token(&self, token: &str) -> Option<Identity> {
        let username = token.strip_prefix("access-")?;
        self.users.iter().find(|(name, _, _)| name == username).map(|(_, _, identity)| identity.clone())
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn obtain_tokens(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.calls.borrow_mut().push(format!("login:{}", credentials.username));
        self.users
            .iter()
            .find(|(name, password, _)| *name == credentials.username && *password == credentials.password)
            .map(|(name, _, _)| TokenPair { access: format!("access-{name}"), refresh: format!("refresh-{name}") })
            .ok_or_else(|| ApiError::Auth("No active account found with the given credentials".to_owned()))
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ApiError> {
        self.calls.borrow_mut().push("refresh".to_owned());
        if let Some(err) = &self.refresh_error {
            return Err(err.clone());
        }
        let name = refresh_token.strip_prefix("refresh-").ok_or(ApiError::SessionExpired)?;
        Ok(format!("access-{name}"))
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<Identity, ApiError> {
        self.calls.borrow_mut().push("profile".to_owned());
        if let Some(err) = self.profile_error.borrow().clone() {
            return Err(err);
        }
        self.identity_for_token(access_token).ok_or(ApiError::SessionExpired)
    }

    async fn update_profile(&self, access_token: &str, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        self.calls.borrow_mut().push("update_profile".to_owned());
        if let Some(err) = self.profile_error.borrow().clone() {
            return Err(err);
        }
        let mut identity = self.identity_for_token(access_token).ok_or(ApiError::SessionExpired)?;
        identity.email = Some(update.email.clone());
        identity.first_name = Some(update.first_name.clone());
        identity.last_name = Some(update.last_name.clone());
        Ok(identity)
    }

    async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(format!("register:{}", registration.username));
        if self.users.iter().any(|(name, _, _)| *name == registration.username) {
            return Err(ApiError::Validation(
                FieldErrors::new().with("username", "This username is already taken."),
            ));
        }
        Ok("User registered successfully! You can now login.".to_owned())
    }

    async fn federated_login(&self, provider_token: &str) -> Result<FederatedLogin, ApiError> {
        self.calls.borrow_mut().push("federated".to_owned());
        if provider_token.is_empty() {
            return Err(ApiError::Auth("Google Login failed".to_owned()));
        }
        Ok(FederatedLogin {
            access: "access-alice".to_owned(),
            refresh: "refresh-alice".to_owned(),
            user: self.federated_user.clone(),
        })
    }
}

// =============================================================
// Fixtures
// =============================================================

fn identity(id: i64, username: &str, is_superuser: bool, is_staff: bool) -> Identity {
    Identity {
        id,
        username: username.to_owned(),
        email: None,
        first_name: None,
        last_name: None,
        is_superuser,
        is_staff,
        role: None,
    }
}

fn backend() -> FakeBackend {
    FakeBackend::default()
        .with_user("alice", "patient-pass", identity(1, "alice", false, false))
        .with_user("drwho", "doctor-pass", identity(2, "drwho", false, true))
        .with_user("root", "admin-pass", identity(3, "root", true, true))
}

type TestStore = SessionStore<FakeBackend, MemoryTokens, Rc<RefCell<Session>>>;

fn store_with(backend: FakeBackend) -> TestStore {
    SessionStore::new(backend, MemoryTokens::new(), Rc::new(RefCell::new(Session::new())))
}

fn creds(username: &str, password: &str) -> Credentials {
    Credentials { username: username.to_owned(), password: password.to_owned() }
}

// =============================================================
// login / logout
// =============================================================

#[tokio::test]
async fn login_persists_tokens_and_signs_in() {
    let store = store_with(backend());
    let identity = store.login(&creds("alice", "patient-pass")).await.expect("login");

    assert_eq!(identity.username, "alice");
    assert_eq!(store.tokens().access_token().as_deref(), Some("access-alice"));
    assert_eq!(store.tokens().refresh_token().as_deref(), Some("refresh-alice"));
    let session = store.session();
    assert!(!session.loading);
    assert_eq!(session.identity, Some(identity));
}

#[tokio::test]
async fn login_with_bad_credentials_propagates_server_message() {
    let store = store_with(backend());
    let err = store.login(&creds("alice", "wrong")).await.expect_err("rejected");

    assert_eq!(err, ApiError::Auth("No active account found with the given credentials".to_owned()));
    assert!(store.tokens().access_token().is_none());
    assert!(!store.session().is_authenticated());
}

#[tokio::test]
async fn login_profile_failure_clears_tokens() {
    let fake = backend();
    *fake.profile_error.borrow_mut() = Some(ApiError::Network("offline".to_owned()));
    let store = store_with(fake);

    let err = store.login(&creds("alice", "patient-pass")).await.expect_err("profile failed");
    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert!(store.tokens().access_token().is_none());
    assert_eq!(store.session(), Session::signed_out());
}

#[tokio::test]
async fn admin_login_then_admin_page_renders_without_loading() {
    let store = store_with(backend());
    store.login(&creds("root", "admin-pass")).await.expect("login");

    let session = store.session();
    assert_eq!(evaluate(&session, "/admin/dashboard"), Decision::Render);
    assert_eq!(evaluate(&session, "/"), Decision::RedirectToAdminHome);
}

#[tokio::test]
async fn logout_clears_everything() {
    let store = store_with(backend());
    store.login(&creds("drwho", "doctor-pass")).await.expect("login");
    store.logout();

    assert!(store.tokens().access_token().is_none());
    assert!(store.tokens().refresh_token().is_none());
    assert_eq!(store.session(), Session::signed_out());
}

// =============================================================
// load_user
// =============================================================

#[tokio::test]
async fn load_user_without_token_settles_signed_out() {
    let store = store_with(backend());
    assert!(store.session().loading);

    store.load_user().await;
    assert_eq!(store.session(), Session::signed_out());
    assert!(store.backend.calls().is_empty());
}

#[tokio::test]
async fn load_user_restores_identity_from_stored_token() {
    let store = store_with(backend());
    store.tokens().store_pair("access-drwho", "refresh-drwho");

    store.load_user().await;
    let session = store.session();
    assert!(!session.loading);
    assert_eq!(session.identity.map(|i| i.username), Some("drwho".to_owned()));
}

#[tokio::test]
async fn load_user_expired_token_signs_out() {
    let store = store_with(backend());
    store.tokens().store_pair("access-ghost", "refresh-ghost");

    store.load_user().await;
    assert_eq!(store.session(), Session::signed_out());
    assert!(store.tokens().access_token().is_none());
}

#[tokio::test]
async fn load_user_network_failure_keeps_tokens_but_settles() {
    let fake = backend();
    *fake.profile_error.borrow_mut() = Some(ApiError::Network("offline".to_owned()));
    let store = store_with(fake);
    store.tokens().store_pair("access-alice", "refresh-alice");

    store.load_user().await;
    assert_eq!(store.session(), Session::signed_out());
    assert_eq!(store.tokens().access_token().as_deref(), Some("access-alice"));
}

// =============================================================
// refresh
// =============================================================

#[tokio::test]
async fn refresh_swaps_access_token_and_reloads_profile() {
    let store = store_with(backend());
    store.tokens().store_pair("stale", "refresh-alice");

    let identity = store.refresh().await.expect("refresh");
    assert_eq!(identity.username, "alice");
    assert_eq!(store.tokens().access_token().as_deref(), Some("access-alice"));
    assert_eq!(store.backend.calls(), ["refresh", "profile"]);
    assert!(!store.session().loading);
}

#[tokio::test]
async fn refresh_without_refresh_token_signs_out() {
    let store = store_with(backend());
    let err = store.refresh().await.expect_err("no token");
    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(store.session(), Session::signed_out());
}

#[tokio::test]
async fn refresh_failure_signs_out_and_reports() {
    let mut fake = backend();
    fake.refresh_error = Some(ApiError::SessionExpired);
    let store = store_with(fake);
    store.login(&creds("alice", "patient-pass")).await.expect("login");

    let err = store.refresh().await.expect_err("refused");
    assert!(err.is_session_expired());
    assert_eq!(store.session(), Session::signed_out());
    assert!(store.tokens().refresh_token().is_none());
}

// =============================================================
// register / federated / profile
// =============================================================

#[tokio::test]
async fn register_validates_locally_before_calling_backend() {
    let store = store_with(backend());
    let form = Registration {
        username: " ".to_owned(),
        password: "short".to_owned(),
        password2: "different".to_owned(),
        ..Registration::default()
    };

    let err = store.register(&form).await.expect_err("invalid");
    let fields = err.fields().expect("validation");
    assert_eq!(fields.first("username"), Some("Username is required."));
    assert_eq!(fields.first("password"), Some("Password must be at least 8 characters."));
    assert!(store.backend.calls().is_empty());
}

#[tokio::test]
async fn register_surfaces_server_field_errors() {
    let store = store_with(backend());
    let form = Registration {
        username: "alice".to_owned(),
        password: "long-enough".to_owned(),
        password2: "long-enough".to_owned(),
        ..Registration::default()
    };

    let err = store.register(&form).await.expect_err("taken");
    assert_eq!(err.to_string(), "This username is already taken.");
    assert!(!store.session().is_authenticated());
}

#[tokio::test]
async fn register_success_does_not_sign_in() {
    let store = store_with(backend());
    store.load_user().await;
    let form = Registration {
        username: "bob".to_owned(),
        password: "long-enough".to_owned(),
        password2: "long-enough".to_owned(),
        ..Registration::default()
    };

    let message = store.register(&form).await.expect("registered");
    assert!(message.contains("registered"));
    assert_eq!(store.session(), Session::signed_out());
}

#[tokio::test]
async fn federated_login_uses_returned_user() {
    let mut fake = backend();
    fake.federated_user = Some(identity(1, "alice", false, false));
    let store = store_with(fake);

    let identity = store.federated_login("google-token").await.expect("login");
    assert_eq!(identity.username, "alice");
    assert_eq!(store.backend.calls(), ["federated"]);
    assert_eq!(store.tokens().access_token().as_deref(), Some("access-alice"));
}

#[tokio::test]
async fn federated_login_fetches_profile_when_user_missing() {
    let store = store_with(backend());
    let identity = store.federated_login("google-token").await.expect("login");
    assert_eq!(identity.username, "alice");
    assert_eq!(store.backend.calls(), ["federated", "profile"]);
}

#[tokio::test]
async fn update_profile_replaces_session_identity() {
    let store = store_with(backend());
    store.login(&creds("alice", "patient-pass")).await.expect("login");

    let update = ProfileUpdate {
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
    };
    let identity = store.update_profile(&update).await.expect("update");
    assert_eq!(identity.display_name(), "Alice Liddell");
    assert_eq!(store.session().identity, Some(identity));
}

#[tokio::test]
async fn update_profile_requires_session() {
    let store = store_with(backend());
    let err = store.update_profile(&ProfileUpdate::default()).await.expect_err("signed out");
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn absorb_signs_out_only_on_expiry() {
    let store = store_with(backend());
    store.login(&creds("alice", "patient-pass")).await.expect("login");

    let err = store.absorb(ApiError::Network("offline".to_owned()));
    assert!(matches!(err, ApiError::Network(_)));
    assert!(store.session().is_authenticated());

    let err = store.absorb(ApiError::SessionExpired);
    assert!(err.is_session_expired());
    assert_eq!(store.session(), Session::signed_out());
}
