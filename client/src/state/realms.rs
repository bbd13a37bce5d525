//! Fetch state for the realm listing and realm detail pages.

#[cfg(test)]
#[path = "realms_test.rs"]
mod realms_test;

use timeline::{ApiError, Event, EventKind, Realm};

/// Realm listing shown on the main page.
///
/// Each fetch takes a generation from [`RealmsState::start`]; results from an
/// older generation are dropped, so a listing fetched with a previous client
/// cannot overwrite a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealmsState {
    pub loading: bool,
    pub realms: Vec<Realm>,
    pub error: Option<String>,
    generation: u64,
}

impl RealmsState {
    /// Mark as loading and return the generation the fetch must report back.
    pub fn start(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.generation
    }

    pub fn apply(&mut self, generation: u64, result: Result<Vec<Realm>, ApiError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(realms) => {
                self.realms = realms;
                self.error = None;
            }
            Err(error) => {
                self.realms.clear();
                self.error = Some(error.to_string());
            }
        }
    }
}

/// One realm with its timeline, scoped to the current `/realms/:uri` route.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealmState {
    pub uri: Option<String>,
    pub loading: bool,
    pub realm: Option<Realm>,
    pub events: Vec<Event>,
    pub error: Option<String>,
}

impl RealmState {
    /// Reset for a new route parameter and mark as loading.
    pub fn start(&mut self, uri: String) {
        *self = Self { uri: Some(uri), loading: true, ..Self::default() };
    }

    /// Apply the fetched realm and events if they still belong to `uri`.
    pub fn apply(&mut self, uri: &str, result: Result<(Realm, Vec<Event>), ApiError>) {
        if self.uri.as_deref() != Some(uri) {
            return;
        }
        self.loading = false;
        match result {
            Ok((realm, events)) => {
                self.realm = Some(realm);
                self.events = events;
            }
            Err(ApiError::Status { status: 404, .. }) => {
                self.error = Some(format!("Realm \"{uri}\" does not exist."));
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    /// Header events in timeline order, used as the table of contents.
    #[must_use]
    pub fn headers(&self) -> Vec<Event> {
        self.events.iter().filter(|event| event.kind == EventKind::Header).cloned().collect()
    }
}

/// Element id for an event, targeted by `#fragment` links.
#[must_use]
pub fn event_anchor(event: &Event) -> String {
    format!("event-{}", event.id)
}
