//! API endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/";
pub const API_BASE_URL_ENV: &str = "TIMELINE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from an optional override, falling back to the default
    /// endpoint when the value is absent or blank.
    #[must_use]
    pub fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() => Self { base_url: url.to_owned() },
            _ => Self::default(),
        }
    }

    /// Build config from `TIMELINE_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }
}

/// Join a relative request path onto a base URL.
///
/// Trailing slashes on the base and leading slashes on the path collapse into
/// a single separator; an empty path yields the base unchanged.
#[must_use]
pub fn combine_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
