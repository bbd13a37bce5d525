use super::*;

fn realm(uri: &str) -> Realm {
    Realm {
        url: format!("http://localhost:5000/{uri}/"),
        url_events: format!("http://localhost:5000/{uri}/events/"),
        url_headers: format!("http://localhost:5000/{uri}/headers/"),
        name: uri.to_uppercase(),
        uri: uri.to_owned(),
    }
}

fn event(id: &str, kind: EventKind) -> Event {
    Event {
        url: format!("http://localhost:5000/events/{id}/"),
        id: id.to_owned(),
        realm: "history".to_owned(),
        kind,
        value: format!("value {id}"),
        order: None,
    }
}

// =============================================================
// RealmsState
// =============================================================

#[test]
fn realms_apply_success_clears_error() {
    let mut state = RealmsState { error: Some("old".to_owned()), ..RealmsState::default() };
    let generation = state.start();
    assert!(state.loading);
    state.apply(generation, Ok(vec![realm("history")]));
    assert!(!state.loading);
    assert_eq!(state.realms.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn realms_apply_failure_records_message() {
    let mut state = RealmsState { realms: vec![realm("history")], ..RealmsState::default() };
    let generation = state.start();
    state.apply(generation, Err(ApiError::Transport("offline".to_owned())));
    assert!(state.realms.is_empty());
    assert_eq!(state.error.as_deref(), Some("request failed: offline"));
}

#[test]
fn realms_apply_ignores_superseded_fetch() {
    let mut state = RealmsState::default();
    let anonymous = state.start();
    let signed_in = state.start();

    state.apply(signed_in, Ok(vec![realm("history"), realm("private")]));
    state.apply(anonymous, Ok(vec![realm("history")]));

    assert!(!state.loading);
    assert_eq!(state.realms.len(), 2);
}

#[test]
fn realms_stale_result_does_not_end_loading() {
    let mut state = RealmsState::default();
    let first = state.start();
    let _second = state.start();

    state.apply(first, Err(ApiError::Transport("offline".to_owned())));

    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// RealmState
// =============================================================

#[test]
fn start_resets_previous_realm() {
    let mut state = RealmState::default();
    state.start("history".to_owned());
    state.apply("history", Ok((realm("history"), vec![event("1", EventKind::Text)])));

    state.start("science".to_owned());

    assert!(state.loading);
    assert!(state.realm.is_none());
    assert!(state.events.is_empty());
    assert_eq!(state.uri.as_deref(), Some("science"));
}

#[test]
fn stale_result_for_previous_uri_is_ignored() {
    let mut state = RealmState::default();
    state.start("science".to_owned());
    state.apply("history", Ok((realm("history"), Vec::new())));
    assert!(state.loading);
    assert!(state.realm.is_none());
}

#[test]
fn missing_realm_gets_friendly_message() {
    let mut state = RealmState::default();
    state.start("nope".to_owned());
    state.apply("nope", Err(ApiError::Status { status: 404, body: String::new() }));
    assert_eq!(state.error.as_deref(), Some("Realm \"nope\" does not exist."));
}

#[test]
fn headers_keep_order_and_filter_text() {
    let mut state = RealmState::default();
    state.start("history".to_owned());
    state.apply(
        "history",
        Ok((
            realm("history"),
            vec![event("1", EventKind::Header), event("2", EventKind::Text), event("3", EventKind::Header)],
        )),
    );
    let ids: Vec<String> = state.headers().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn event_anchor_prefixes_id() {
    assert_eq!(event_anchor(&event("65f0", EventKind::Header)), "event-65f0");
}
