//! Wire types for the timeline wiki REST API.
//!
//! DESIGN
//! ======
//! Read models mirror the backend's JSON representations. Write payloads carry
//! a `validate` method applying the same field rules the backend schema
//! enforces, so obviously bad input never leaves the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Login payload posted to `auth`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    /// The backend login schema names the secret field `value`.
    #[serde(rename = "value")]
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when either field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("email", &self.email)?;
        require_non_empty("value", &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default, deserialize_with = "deserialize_claims_or_null")]
    pub user: Claims,
}

fn deserialize_claims_or_null<'de, D>(deserializer: D) -> Result<Claims, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Claims>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque user attributes returned alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    #[must_use]
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Subject claim; doubles as the user id and display name.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.0.get("role").and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some("admin")
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A realm as represented by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    /// Absolute URL of the realm resource.
    pub url: String,
    /// Absolute URL of the realm's event listing.
    pub url_events: String,
    /// Absolute URL of the realm's header listing.
    pub url_headers: String,
    pub name: String,
    /// Path segment identifying the realm.
    pub uri: String,
}

/// Kind of a timeline event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Free text entry.
    #[default]
    Text,
    /// Section title; listed separately as a realm's table of contents.
    Header,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Header => "header",
        }
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "text" => Ok(Self::Text),
            "header" => Ok(Self::Header),
            other => Err(ValidationError::InvalidEventType(other.to_owned())),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry on a realm's timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub url: String,
    pub id: String,
    /// URI of the owning realm.
    pub realm: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub value: String,
    /// Sort key; the server returns listings in ascending order.
    #[serde(default)]
    pub order: Option<f64>,
}

/// Payload for `POST` on the realm listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRealm {
    pub uri: String,
    pub name: String,
}

impl NewRealm {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty name or a malformed uri.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_uri(&self.uri)?;
        require_non_empty("name", &self.name)
    }
}

/// Payload for `PUT` on a realm. The name is required, the uri optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl RealmUpdate {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty name or a malformed uri.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(uri) = &self.uri {
            validate_uri(uri)?;
        }
        require_non_empty("name", &self.name)
    }
}

/// Payload for `POST` on a realm's event listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl NewEvent {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] for an empty value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("value", &self.value)
    }
}

/// Partial update for an event; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl EventUpdate {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when a value is given but empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.value {
            Some(value) => require_non_empty("value", value),
            None => Ok(()),
        }
    }
}

/// Check a realm uri against `^[a-z0-9_]+$`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUri`] when the uri is empty or contains
/// any other character.
pub fn validate_uri(uri: &str) -> Result<(), ValidationError> {
    let valid = !uri.is_empty()
        && uri
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if valid { Ok(()) } else { Err(ValidationError::InvalidUri(uri.to_owned())) }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() { Err(ValidationError::EmptyField(field)) } else { Ok(()) }
}
