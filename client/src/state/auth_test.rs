use super::*;
use timeline::{AuthStatus, Claims};

// =============================================================
// Helpers
// =============================================================

fn state() -> AuthState {
    AuthState::new(&ApiConfig::default())
}

fn accepted(token: &str, user: serde_json::Value) -> Result<AuthResponse, ApiError> {
    Ok(AuthResponse { token: token.to_owned(), user: serde_json::from_value::<Claims>(user).unwrap() })
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn new_state_is_idle_without_browser_storage() {
    let state = state();
    assert_eq!(state.store.status(), AuthStatus::Idle);
    assert!(state.last_error.is_none());
}

#[test]
fn begin_login_snapshots_client_and_clears_error() {
    let mut state = state();
    state.last_error = Some("old".to_owned());

    let (_ticket, client) = state.begin_login().unwrap();

    assert_eq!(state.store.status(), AuthStatus::Started);
    assert_eq!(client.authorization(), None);
    assert!(state.last_error.is_none());
}

#[test]
fn overlapping_begin_login_is_refused() {
    let mut state = state();
    let _ticket = state.begin_login().unwrap();
    assert_eq!(state.begin_login().unwrap_err(), SessionError::LoginInFlight);
}

#[test]
fn successful_outcome_authenticates() {
    let mut state = state();
    let (ticket, _) = state.begin_login().unwrap();

    state.apply_login_outcome(ticket, accepted("tok", serde_json::json!({ "sub": "ada", "role": "admin" })));

    assert!(state.store.is_authenticated());
    assert_eq!(state.store.client().authorization(), Some("tok"));
    assert_eq!(state.display_name(), "ada");
    assert!(state.store.is_admin());
    assert!(state.last_error.is_none());
}

#[test]
fn failed_outcome_records_message() {
    let mut state = state();
    let (ticket, _) = state.begin_login().unwrap();

    state.apply_login_outcome(ticket, Err(ApiError::Status { status: 401, body: String::new() }));

    assert_eq!(state.store.status(), AuthStatus::Error);
    assert_eq!(state.last_error.as_deref(), Some("Invalid email or password."));
}

#[test]
fn superseded_outcome_is_silent() {
    let mut state = state();
    let (ticket, _) = state.begin_login().unwrap();
    state.logout();

    state.apply_login_outcome(ticket, accepted("late", serde_json::json!({})));

    assert_eq!(state.store.status(), AuthStatus::Idle);
    assert!(state.last_error.is_none());
}

#[test]
fn display_name_falls_back_without_claims() {
    let mut state = state();
    let (ticket, _) = state.begin_login().unwrap();
    state.apply_login_outcome(ticket, accepted("tok", serde_json::json!({})));
    assert_eq!(state.display_name(), "signed in");
}

// =============================================================
// login_error_message
// =============================================================

#[test]
fn login_error_message_variants() {
    assert_eq!(login_error_message(&SessionError::LoginInFlight), "A sign-in is already in progress.");
    assert_eq!(
        login_error_message(&SessionError::Rejected(ApiError::Status { status: 403, body: String::new() })),
        "Invalid email or password."
    );
    assert_eq!(
        login_error_message(&SessionError::Rejected(ApiError::Transport("offline".to_owned()))),
        "Sign-in failed: request failed: offline"
    );
}
