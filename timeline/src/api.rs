//! API client value and typed REST calls.
//!
//! DESIGN
//! ======
//! [`ApiClient`] is an immutable value holding the base endpoint and the
//! current token. Session transitions build a new client instead of mutating
//! shared default headers, so whoever holds a client knows exactly which
//! credentials its requests carry.
//!
//! Requests are described as plain [`ApiRequest`] values and executed by a
//! [`Transport`], keeping the HTTP library out of this crate.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ApiConfig, combine_url};
use crate::error::ApiError;
use crate::types::{
    AuthResponse, Credentials, Event, EventKind, EventUpdate, NewEvent, NewRealm, Realm, RealmUpdate,
};

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved request, ready for a transport to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent verbatim as the `Authorization` header when present.
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Executes requests against the network.
///
/// Futures are not required to be `Send`; browser fetch futures are not.
#[async_trait(?Send)]
pub trait Transport {
    /// Send one request and return whatever the server answered.
    ///
    /// Non-2xx statuses are returned as responses, not errors; only failures
    /// to complete the exchange are errors.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Base endpoint plus the token outgoing requests carry.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Unauthenticated client for the configured endpoint.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), token: None }
    }

    /// Same endpoint, carrying `token`. An empty token yields an
    /// unauthenticated client.
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        let token = token.into();
        Self { base_url: self.base_url.clone(), token: (!token.is_empty()).then_some(token) }
    }

    /// Same endpoint, no authorization.
    #[must_use]
    pub fn without_token(&self) -> Self {
        Self { base_url: self.base_url.clone(), token: None }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `Authorization` header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        combine_url(&self.base_url, path)
    }

    /// Build a request for `path` relative to the base endpoint.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest { method, url: self.url(path), authorization: self.token.clone(), body: None }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

// =============================================================
// Paths
// =============================================================

const AUTH_PATH: &str = "auth";

fn realm_path(uri: &str) -> String {
    format!("{}/", urlencoding::encode(uri))
}

fn realm_events_path(uri: &str, kind: Option<EventKind>) -> String {
    let base = format!("{}/events/", urlencoding::encode(uri));
    match kind {
        Some(kind) => format!("{base}?type={}", kind.as_str()),
        None => base,
    }
}

fn realm_headers_path(uri: &str) -> String {
    format!("{}/headers/", urlencoding::encode(uri))
}

fn event_path(id: &str) -> String {
    format!("events/{}/", urlencoding::encode(id))
}

// =============================================================
// Execution helpers
// =============================================================

async fn execute<T>(transport: &T, request: ApiRequest) -> Result<ApiResponse, ApiError>
where
    T: Transport + ?Sized,
{
    tracing::debug!(method = request.method.as_str(), url = %request.url, "api request");
    let response = transport.send(request).await?;
    if !response.is_success() {
        tracing::debug!(status = response.status, "api request rejected");
        return Err(ApiError::Status { status: response.status, body: response.body });
    }
    Ok(response)
}

async fn fetch_json<T, R>(transport: &T, request: ApiRequest) -> Result<R, ApiError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    execute(transport, request).await?.json()
}

// =============================================================
// Auth
// =============================================================

/// `POST auth` with the given credentials.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] for blank credentials (no request is sent),
/// otherwise any transport, status, or decode failure.
pub async fn login_request<T>(
    transport: &T,
    client: &ApiClient,
    credentials: &Credentials,
) -> Result<AuthResponse, ApiError>
where
    T: Transport + ?Sized,
{
    credentials.validate()?;
    let request = client.request(Method::Post, AUTH_PATH).json(credentials)?;
    fetch_json(transport, request).await
}

// =============================================================
// Realms
// =============================================================

/// List all realms.
///
/// # Errors
///
/// Returns any transport, status, or decode failure.
pub async fn list_realms<T>(transport: &T, client: &ApiClient) -> Result<Vec<Realm>, ApiError>
where
    T: Transport + ?Sized,
{
    fetch_json(transport, client.request(Method::Get, "")).await
}

/// Create a realm.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] for a payload the backend would reject,
/// otherwise any transport, status, or decode failure.
pub async fn create_realm<T>(transport: &T, client: &ApiClient, realm: &NewRealm) -> Result<Realm, ApiError>
where
    T: Transport + ?Sized,
{
    realm.validate()?;
    fetch_json(transport, client.request(Method::Post, "").json(realm)?).await
}

/// Fetch one realm by uri.
///
/// # Errors
///
/// Returns any transport, status, or decode failure.
pub async fn get_realm<T>(transport: &T, client: &ApiClient, uri: &str) -> Result<Realm, ApiError>
where
    T: Transport + ?Sized,
{
    fetch_json(transport, client.request(Method::Get, &realm_path(uri))).await
}

/// Rename a realm and optionally move it to a new uri.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] for a payload the backend would reject,
/// otherwise any transport, status, or decode failure.
pub async fn update_realm<T>(
    transport: &T,
    client: &ApiClient,
    uri: &str,
    update: &RealmUpdate,
) -> Result<Realm, ApiError>
where
    T: Transport + ?Sized,
{
    update.validate()?;
    fetch_json(transport, client.request(Method::Put, &realm_path(uri)).json(update)?).await
}

/// Delete a realm.
///
/// # Errors
///
/// Returns any transport or status failure.
pub async fn delete_realm<T>(transport: &T, client: &ApiClient, uri: &str) -> Result<(), ApiError>
where
    T: Transport + ?Sized,
{
    execute(transport, client.request(Method::Delete, &realm_path(uri))).await?;
    Ok(())
}

// =============================================================
// Events
// =============================================================

/// List a realm's events in server order, optionally filtered by kind.
///
/// # Errors
///
/// Returns any transport, status, or decode failure.
pub async fn list_events<T>(
    transport: &T,
    client: &ApiClient,
    realm_uri: &str,
    kind: Option<EventKind>,
) -> Result<Vec<Event>, ApiError>
where
    T: Transport + ?Sized,
{
    fetch_json(transport, client.request(Method::Get, &realm_events_path(realm_uri, kind))).await
}

/// List only a realm's header events.
///
/// # Errors
///
/// Returns any transport, status, or decode failure.
pub async fn list_headers<T>(transport: &T, client: &ApiClient, realm_uri: &str) -> Result<Vec<Event>, ApiError>
where
    T: Transport + ?Sized,
{
    fetch_json(transport, client.request(Method::Get, &realm_headers_path(realm_uri))).await
}

/// Append an event to a realm.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] for an empty value, otherwise any
/// transport, status, or decode failure.
pub async fn create_event<T>(
    transport: &T,
    client: &ApiClient,
    realm_uri: &str,
    event: &NewEvent,
) -> Result<Event, ApiError>
where
    T: Transport + ?Sized,
{
    event.validate()?;
    let request = client.request(Method::Post, &realm_events_path(realm_uri, None)).json(event)?;
    fetch_json(transport, request).await
}

/// Fetch one event by id.
///
/// # Errors
///
/// Returns any transport, status, or decode failure.
pub async fn get_event<T>(transport: &T, client: &ApiClient, id: &str) -> Result<Event, ApiError>
where
    T: Transport + ?Sized,
{
    fetch_json(transport, client.request(Method::Get, &event_path(id))).await
}

/// Apply a partial update to an event.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] for an empty value, otherwise any
/// transport, status, or decode failure.
pub async fn update_event<T>(
    transport: &T,
    client: &ApiClient,
    id: &str,
    update: &EventUpdate,
) -> Result<Event, ApiError>
where
    T: Transport + ?Sized,
{
    update.validate()?;
    fetch_json(transport, client.request(Method::Put, &event_path(id)).json(update)?).await
}

/// Delete an event.
///
/// # Errors
///
/// Returns any transport or status failure.
pub async fn delete_event<T>(transport: &T, client: &ApiClient, id: &str) -> Result<(), ApiError>
where
    T: Transport + ?Sized,
{
    execute(transport, client.request(Method::Delete, &event_path(id))).await?;
    Ok(())
}
