//! Static route table for the history-mode router.
//!
//! The rendered tree registers the same two patterns with `leptos_router`;
//! this table is the framework-free copy used for link building, the CLI's
//! `route` command, and tests.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::borrow::Cow;

pub const MAIN_PATH: &str = "/";
/// Must stay `/{REALMS_SEGMENT}/:{REALM_PARAM}`; the client's `leptos_router`
/// tree is declared from those two constants.
pub const REALM_PATH: &str = "/realms/:uri";
pub const REALMS_SEGMENT: &str = "realms";
pub const REALM_PARAM: &str = "uri";

/// A resolved location in the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Realm listing.
    Main,
    /// Detail view of one realm.
    Realm { uri: String },
}

impl Route {
    /// Name of the view component the route renders.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "MainPage",
            Self::Realm { .. } => "RealmPage",
        }
    }

    /// Canonical path for the route, with parameters percent-encoded.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Main => MAIN_PATH.to_owned(),
            Self::Realm { uri } => format!("/{REALMS_SEGMENT}/{}", urlencoding::encode(uri)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Main,
    Realm,
}

#[derive(Clone, Debug)]
struct RouteDef {
    segments: Vec<Segment>,
    view: View,
}

impl RouteDef {
    fn parse(pattern: &'static str, view: View) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Static(seg),
            })
            .collect();
        Self { segments, view }
    }

    fn matches<'a>(&self, parts: &[&'a str]) -> Option<Vec<(&'static str, Cow<'a, str>)>> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = Vec::new();
        for (segment, &part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.push((*name, urlencoding::decode(part).ok()?));
                }
            }
        }
        Some(params)
    }
}

/// The application's routes: `/` and `/realms/:uri`.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self { routes: vec![RouteDef::parse(MAIN_PATH, View::Main), RouteDef::parse(REALM_PATH, View::Realm)] }
    }

    /// Resolve a path (query and fragment ignored) to a route.
    ///
    /// Static segments compare case-insensitively, a single trailing slash is
    /// tolerated, and parameters are percent-decoded.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = strip_query_and_fragment(path);
        let parts = split_path(path);
        self.routes.iter().find_map(|def| {
            let params = def.matches(&parts)?;
            Some(match def.view {
                View::Main => Route::Main,
                View::Realm => {
                    let uri = params.into_iter().find(|(name, _)| *name == REALM_PARAM)?.1;
                    Route::Realm { uri: uri.into_owned() }
                }
            })
        })
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    &path[..end]
}

fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() { Vec::new() } else { trimmed.split('/').collect() }
}
