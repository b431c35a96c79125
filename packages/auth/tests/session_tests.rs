// ABOUTME: Integration tests for login, registration and logout
// ABOUTME: Covers both auth modes, the admin account, and workspace binding

use pretty_assertions::assert_eq;
use rstest::rstest;
use taskboard_auth::{AuthError, AuthMode, CredentialVerifier, Session};
use taskboard_core::Role;

#[rstest]
#[case(AuthMode::Open)]
#[case(AuthMode::Registered)]
fn test_admin_login(#[case] mode: AuthMode) {
    let mut session = Session::new(mode);
    let user = session.login("admin", "qwerty12+").unwrap();

    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.username, "admin");
    assert_eq!(user.workspace_id, None);
    assert_eq!(session.current_user(), Some(&user));
}

#[rstest]
#[case("", "pw")]
#[case("alice", "")]
#[case("", "")]
fn test_login_missing_fields(#[case] username: &str, #[case] password: &str) {
    let mut session = Session::new(AuthMode::Open);
    assert_eq!(
        session.login(username, password),
        Err(AuthError::MissingFields)
    );
    assert!(!session.is_authenticated());
}

#[test]
fn test_open_mode_accepts_any_pair() {
    let mut session = Session::new(AuthMode::Open);
    let user = session.login("bob", "whatever").unwrap();

    assert_eq!(user.role, Role::User);
    assert_eq!(user.workspace_id, None);
}

#[test]
fn test_registered_mode_rejects_unknown_user() {
    let mut session = Session::new(AuthMode::Registered);
    assert_eq!(
        session.login("bob", "whatever"),
        Err(AuthError::InvalidCredentials)
    );
    assert!(!session.is_authenticated());
}

#[test]
fn test_register_then_login() {
    let mut session = Session::new(AuthMode::Registered);
    let registered = session
        .register("alice", "pw1", "ws-alice".to_string())
        .unwrap();
    assert_eq!(registered.role, Role::User);
    assert_eq!(registered.workspace_id.as_deref(), Some("ws-alice"));
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());

    let user = session.login("alice", "pw1").unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.workspace_id.as_deref(), Some("ws-alice"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let mut session = Session::new(AuthMode::Registered);
    session
        .register("alice", "pw1", "ws-alice".to_string())
        .unwrap();
    session.logout();

    assert_eq!(
        session.login("alice", "pw2"),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn test_register_twice_fails() {
    let mut session = Session::new(AuthMode::Registered);
    session.register("alice", "pw1", "ws-1".to_string()).unwrap();
    session.logout();

    assert_eq!(
        session.register("alice", "pw1", "ws-2".to_string()),
        Err(AuthError::UsernameTaken("alice".into()))
    );
    assert_eq!(session.roster().len(), 1);
    assert!(!session.is_authenticated());
}

#[test]
fn test_register_admin_name_is_taken() {
    let mut session = Session::new(AuthMode::Registered);
    assert_eq!(
        session.register("admin", "pw", "ws".to_string()),
        Err(AuthError::UsernameTaken("admin".into()))
    );
}

#[test]
fn test_register_missing_fields() {
    let mut session = Session::new(AuthMode::Registered);
    assert_eq!(
        session.register("", "pw", "ws".to_string()),
        Err(AuthError::MissingFields)
    );
    assert!(session.roster().is_empty());
}

#[test]
fn test_logout_returns_previous_user() {
    let mut session = Session::new(AuthMode::Open);
    session.login("bob", "pw").unwrap();

    let previous = session.logout().unwrap();
    assert_eq!(previous.username, "bob");
    assert_eq!(session.logout(), None);
}

#[test]
fn test_open_mode_binding_survives_relogin() {
    let mut session = Session::new(AuthMode::Open);
    session.login("bob", "pw").unwrap();

    let bound = session.bind_workspace("ws-bob").cloned().unwrap();
    assert_eq!(bound.workspace_id.as_deref(), Some("ws-bob"));

    // A second bind keeps the first workspace
    session.bind_workspace("ws-other");
    assert_eq!(
        session.current_user().and_then(|u| u.workspace_id.as_deref()),
        Some("ws-bob")
    );

    session.logout();
    let user = session.login("bob", "pw").unwrap();
    assert_eq!(user.workspace_id.as_deref(), Some("ws-bob"));
}

#[test]
fn test_admin_is_never_bound() {
    let mut session = Session::new(AuthMode::Open);
    session.login("admin", "qwerty12+").unwrap();
    session.bind_workspace("ws");
    assert_eq!(session.current_user().unwrap().workspace_id, None);
}

struct Fixed(&'static str, &'static str);

impl CredentialVerifier for Fixed {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.0 && password == self.1
    }
}

#[test]
fn test_custom_admin_verifier() {
    let mut session =
        Session::new(AuthMode::Registered).with_admin_verifier(Fixed("root", "s3cret"));

    assert_eq!(session.login("root", "s3cret").unwrap().role, Role::Admin);
    session.logout();
    assert_eq!(
        session.login("admin", "qwerty12+"),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn test_auth_mode_parse() {
    assert_eq!("OPEN".parse::<AuthMode>(), Ok(AuthMode::Open));
    assert_eq!("registered".parse::<AuthMode>(), Ok(AuthMode::Registered));
    assert_eq!(
        "ldap".parse::<AuthMode>(),
        Err(AuthError::InvalidMode("ldap".into()))
    );
}
