//! Error types shared by the session store, API calls, and storage backends.

/// Failure of a single API call.
///
/// The session store does not distinguish between these: any of them turns a
/// pending login into the `error` state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The payload was rejected before any request was sent.
    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Failure of a session transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `begin_login` was called while another login is still pending.
    #[error("a login is already in progress")]
    LoginInFlight,
    /// The login this ticket belongs to was cancelled by a logout or replaced.
    #[error("login was superseded")]
    Superseded,
    /// The server (or the network) rejected the login.
    #[error("login rejected: {0}")]
    Rejected(#[from] ApiError),
}

/// Failure of a persistent storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is available in this environment.
    #[error("storage unavailable")]
    Unavailable,
    /// Reading or writing the backing store failed.
    #[error("storage i/o failed: {0}")]
    Io(String),
}

/// Client-side rejection of a write payload, matching the backend's schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("empty string: {0}")]
    EmptyField(&'static str),
    #[error("uri must match ^[a-z0-9_]+$: {0:?}")]
    InvalidUri(String),
    #[error("event type should be one of text, header: {0:?}")]
    InvalidEventType(String),
}
