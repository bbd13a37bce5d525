//! Authentication session state machine.
//!
//! ARCHITECTURE
//! ============
//! `idle -> started -> {success, error}`, and `success -> idle` via logout.
//! The store is a single owned value: the token, the claims, the persisted
//! copy of the token and the [`ApiClient`] all change together in one place.
//!
//! A login is two steps so owners that cannot hold `&mut` across an await
//! (reactive signals) can drive it: [`SessionStore::begin_login`] hands out a
//! [`LoginTicket`], the caller performs the request, and
//! [`SessionStore::finish_login`] applies the outcome. Only one ticket is
//! outstanding at a time; logout invalidates it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::api::{self, ApiClient, Transport};
use crate::config::ApiConfig;
use crate::error::{ApiError, SessionError};
use crate::storage::{AUTH_TOKEN_KEY, TokenStorage};
use crate::types::{AuthResponse, Claims, Credentials};

/// Authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Idle,
    Started,
    Success,
    Error,
}

impl AuthStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Started => "started",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Client-side record of authentication status and token.
///
/// The token is non-empty exactly when the status is `Success`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub status: AuthStatus,
    pub token: String,
    pub user: Claims,
}

/// Handle for one pending login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a login ticket must be passed to finish_login"]
pub struct LoginTicket(u64);

/// Owns the session, its persisted token, and the matching API client.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    client: ApiClient,
    storage: S,
    next_ticket: u64,
    pending: Option<LoginTicket>,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Create the store, restoring a previously persisted token.
    ///
    /// A restored token puts the session straight into `Success` with empty
    /// claims; the claims only arrive with a fresh login.
    pub fn restore(config: &ApiConfig, storage: S) -> Self {
        let anonymous = ApiClient::new(config);
        let persisted = storage.get_item(AUTH_TOKEN_KEY).filter(|token| !token.is_empty());
        let (session, client) = match persisted {
            Some(token) => {
                tracing::debug!("restored persisted session token");
                let client = anonymous.with_token(token.clone());
                (Session { status: AuthStatus::Success, token, user: Claims::default() }, client)
            }
            None => (Session::default(), anonymous),
        };
        Self { session, client, storage, next_ticket: 0, pending: None }
    }

    // =============================================================
    // Transitions
    // =============================================================

    /// Move to `Started` and reserve the single login slot.
    ///
    /// Any current token and claims are dropped from the session and the
    /// client; the persisted copy stays until the login resolves.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginInFlight`] if a login is already pending;
    /// the session is left untouched.
    pub fn begin_login(&mut self) -> Result<LoginTicket, SessionError> {
        if self.pending.is_some() {
            tracing::warn!("login rejected: another login is in flight");
            return Err(SessionError::LoginInFlight);
        }
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = LoginTicket(self.next_ticket);
        self.pending = Some(ticket);
        // A re-login from `Success` must not keep acting on the old token.
        self.client = self.client.without_token();
        self.session = Session { status: AuthStatus::Started, token: String::new(), user: Claims::default() };
        Ok(ticket)
    }

    /// Apply the outcome of the request started with `ticket`.
    ///
    /// On success the token is persisted, attached to the client, and the
    /// returned claims are kept. On failure the session moves to `Error`, the
    /// persisted token is removed, and the failure is returned. A response with
    /// an empty token counts as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Superseded`] if `ticket` is no longer the pending
    /// login (state and storage are untouched), or
    /// [`SessionError::Rejected`] when the login failed.
    pub fn finish_login(
        &mut self,
        ticket: LoginTicket,
        outcome: Result<AuthResponse, ApiError>,
    ) -> Result<(), SessionError> {
        if self.pending != Some(ticket) {
            tracing::debug!("ignoring completion of a superseded login");
            return Err(SessionError::Superseded);
        }
        self.pending = None;

        let outcome = outcome.and_then(|resp| {
            if resp.token.is_empty() {
                Err(ApiError::Decode("login response carried an empty token".to_owned()))
            } else {
                Ok(resp)
            }
        });

        match outcome {
            Ok(AuthResponse { token, user }) => {
                if let Err(error) = self.storage.set_item(AUTH_TOKEN_KEY, &token) {
                    tracing::warn!(%error, "failed to persist session token");
                }
                self.client = self.client.with_token(token.clone());
                self.session = Session { status: AuthStatus::Success, token, user };
                tracing::info!(user = self.user_id().unwrap_or("<unknown>"), "login succeeded");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "login failed");
                self.storage.remove_item(AUTH_TOKEN_KEY);
                self.client = self.client.without_token();
                self.session = Session { status: AuthStatus::Error, token: String::new(), user: Claims::default() };
                Err(SessionError::Rejected(error))
            }
        }
    }

    /// Single-attempt login: begin, send `POST auth`, finish.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginInFlight`] if a login is pending, or
    /// [`SessionError::Rejected`] if the request failed for any reason.
    pub async fn login<T>(&mut self, transport: &T, credentials: &Credentials) -> Result<(), SessionError>
    where
        T: Transport + ?Sized,
    {
        let ticket = self.begin_login()?;
        let outcome = api::login_request(transport, &self.client, credentials).await;
        self.finish_login(ticket, outcome)
    }

    /// Return to `Idle`, dropping the token everywhere. Cancels a pending
    /// login so its completion is ignored.
    pub fn logout(&mut self) {
        self.pending = None;
        self.storage.remove_item(AUTH_TOKEN_KEY);
        self.client = self.client.without_token();
        self.session = Session::default();
        tracing::info!("logged out");
    }

    // =============================================================
    // Accessors
    // =============================================================

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.session.status
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.session.token
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.status == AuthStatus::Success
    }

    #[must_use]
    pub fn is_login_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Client carrying the current token; clone it for requests.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub fn user(&self) -> &Claims {
        &self.session.user
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.session.user.subject()
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.session.user.subject()
    }

    #[must_use]
    pub fn user_role(&self) -> Option<&str> {
        self.session.user.role()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.user.is_admin()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
