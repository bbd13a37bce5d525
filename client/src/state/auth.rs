//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single [`AuthState`] is provided through context as an `RwSignal`. Views
//! read the session from it and mutate it only through [`spawn_login`] and
//! [`logout`], which drive the store's two-phase login so the signal is never
//! borrowed across an await.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use timeline::{ApiClient, ApiConfig, ApiError, AuthResponse, Credentials, LoginTicket, SessionError, SessionStore};

use crate::util::storage::BrowserStorage;

/// Endpoint baked in at build time via `TIMELINE_API_URL`.
#[must_use]
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("TIMELINE_API_URL"))
}

/// Session store plus the last failure message shown to the user.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub store: SessionStore<BrowserStorage>,
    pub last_error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { store: SessionStore::restore(config, BrowserStorage), last_error: None }
    }

    /// Restore from `localStorage` using the build-time endpoint.
    #[must_use]
    pub fn restore_from_storage() -> Self {
        Self::new(&api_config())
    }

    /// Reserve the login slot and snapshot the client to send with.
    fn begin_login(&mut self) -> Result<(LoginTicket, ApiClient), SessionError> {
        let ticket = self.store.begin_login()?;
        self.last_error = None;
        Ok((ticket, self.store.client().clone()))
    }

    /// Apply a completed login request. Superseded completions are dropped.
    pub fn apply_login_outcome(&mut self, ticket: LoginTicket, outcome: Result<AuthResponse, ApiError>) {
        match self.store.finish_login(ticket, outcome) {
            Ok(()) | Err(SessionError::Superseded) => {}
            Err(error) => self.last_error = Some(login_error_message(&error)),
        }
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.last_error = None;
    }

    /// Display name for the header; falls back when claims are absent.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.store.user_name().unwrap_or("signed in").to_owned()
    }
}

/// User-facing text for a failed login.
#[must_use]
pub fn login_error_message(error: &SessionError) -> String {
    match error {
        SessionError::LoginInFlight => "A sign-in is already in progress.".to_owned(),
        SessionError::Superseded => "Sign-in was cancelled.".to_owned(),
        SessionError::Rejected(ApiError::Status { status: 401 | 403, .. }) => {
            "Invalid email or password.".to_owned()
        }
        SessionError::Rejected(ApiError::Invalid(invalid)) => format!("Sign-in failed: {invalid}"),
        SessionError::Rejected(other) => format!("Sign-in failed: {other}"),
    }
}

/// Start a login for `credentials`.
///
/// Overlapping calls are refused by the store; the refusal is surfaced as
/// `last_error` without touching the pending login.
pub fn spawn_login(auth: RwSignal<AuthState>, credentials: Credentials) {
    let started = auth.try_update(AuthState::begin_login);
    let (ticket, client) = match started {
        Some(Ok(started)) => started,
        Some(Err(error)) => {
            auth.update(|state| state.last_error = Some(login_error_message(&error)));
            return;
        }
        None => return,
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = timeline::api::login_request(&crate::net::api::GlooTransport, &client, &credentials).await;
        auth.update(|state| state.apply_login_outcome(ticket, outcome));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, credentials);
        let outcome = Err(ApiError::Transport(crate::net::api::UNAVAILABLE.to_owned()));
        auth.update(|state| state.apply_login_outcome(ticket, outcome));
    }
}

/// Drop the session. Never fails.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::logout);
}
