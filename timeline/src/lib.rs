//! Framework-free core of the timeline wiki front end.
//!
//! This crate owns everything the browser `client` and the native `cli` share:
//! the authentication session state machine, the immutable API client value,
//! typed REST calls over a pluggable [`Transport`], token persistence behind
//! [`TokenStorage`], and the static route table with its scroll policy.
//!
//! ARCHITECTURE
//! ============
//! Nothing here performs I/O directly. Front ends supply a transport and a
//! storage backend, so the same session logic runs against `gloo-net` +
//! `localStorage` in the browser and `reqwest` + a JSON file natively.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod scroll;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use config::ApiConfig;
pub use error::{ApiError, SessionError, StorageError, ValidationError};
pub use routes::{Route, RouteTable};
pub use session::{AuthStatus, LoginTicket, Session, SessionStore};
pub use storage::{AUTH_TOKEN_KEY, MemoryStorage, TokenStorage};
pub use types::{AuthResponse, Claims, Credentials, Event, EventKind, Realm};
