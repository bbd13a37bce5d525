use super::*;

// =============================================================
// Helpers
// =============================================================

fn claims(value: serde_json::Value) -> Claims {
    serde_json::from_value(value).expect("claims")
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_secret_as_value() {
    let creds = Credentials::new("a@b.com", "hunter2");
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "value": "hunter2" }));
}

#[test]
fn credentials_debug_redacts_secret() {
    let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn credentials_validate_requires_both_fields() {
    assert_eq!(Credentials::new("a@b.com", "pw").validate(), Ok(()));
    assert_eq!(Credentials::new("", "pw").validate(), Err(ValidationError::EmptyField("email")));
    assert_eq!(Credentials::new("a@b.com", "").validate(), Err(ValidationError::EmptyField("value")));
}

// =============================================================
// AuthResponse / Claims
// =============================================================

#[test]
fn auth_response_parses_token_and_user() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"token":"abc","user":{"sub":"u-1","role":"admin"}}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.subject(), Some("u-1"));
    assert!(resp.user.is_admin());
}

#[test]
fn auth_response_defaults_missing_or_null_user() {
    let missing: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert!(missing.user.is_empty());
    let null: AuthResponse = serde_json::from_str(r#"{"token":"abc","user":null}"#).unwrap();
    assert!(null.user.is_empty());
}

#[test]
fn claims_accessors_are_none_without_values() {
    let empty = Claims::default();
    assert_eq!(empty.subject(), None);
    assert_eq!(empty.role(), None);
    assert!(!empty.is_admin());
}

#[test]
fn claims_non_admin_role_is_not_admin() {
    let editor = claims(serde_json::json!({ "sub": "u-2", "role": "editor" }));
    assert_eq!(editor.role(), Some("editor"));
    assert!(!editor.is_admin());
}

#[test]
fn claims_non_string_role_is_ignored() {
    let odd = claims(serde_json::json!({ "role": 7 }));
    assert_eq!(odd.role(), None);
    assert!(odd.get("role").is_some());
}

// =============================================================
// Realm / Event
// =============================================================

#[test]
fn realm_parses_backend_representation() {
    let realm: Realm = serde_json::from_value(serde_json::json!({
        "url": "http://h/history/",
        "url_events": "http://h/history/events/",
        "url_headers": "http://h/history/headers/",
        "name": "History",
        "uri": "history"
    }))
    .unwrap();
    assert_eq!(realm.uri, "history");
    assert_eq!(realm.name, "History");
}

#[test]
fn event_parses_type_field_and_null_order() {
    let event: Event = serde_json::from_value(serde_json::json!({
        "url": "http://h/events/1/",
        "id": "1",
        "realm": "history",
        "type": "header",
        "value": "Antiquity",
        "order": null
    }))
    .unwrap();
    assert_eq!(event.kind, EventKind::Header);
    assert_eq!(event.order, None);
}

#[test]
fn event_kind_from_str_rejects_unknown() {
    assert_eq!("text".parse::<EventKind>(), Ok(EventKind::Text));
    assert_eq!("header".parse::<EventKind>(), Ok(EventKind::Header));
    assert_eq!(
        "image".parse::<EventKind>(),
        Err(ValidationError::InvalidEventType("image".to_owned()))
    );
}

// =============================================================
// Write payload validation
// =============================================================

#[test]
fn validate_uri_accepts_lowercase_digits_underscore() {
    assert_eq!(validate_uri("world_war_2"), Ok(()));
}

#[test]
fn validate_uri_rejects_empty_uppercase_and_dashes() {
    for bad in ["", "History", "a-b", "a b", "ä"] {
        assert_eq!(validate_uri(bad), Err(ValidationError::InvalidUri(bad.to_owned())));
    }
}

#[test]
fn new_realm_requires_name() {
    let realm = NewRealm { uri: "history".to_owned(), name: String::new() };
    assert_eq!(realm.validate(), Err(ValidationError::EmptyField("name")));
}

#[test]
fn realm_update_skips_absent_uri() {
    let update = RealmUpdate { name: "Renamed".to_owned(), uri: None };
    assert_eq!(update.validate(), Ok(()));
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "name": "Renamed" }));
}

#[test]
fn realm_update_checks_present_uri() {
    let update = RealmUpdate { name: "Renamed".to_owned(), uri: Some("Bad".to_owned()) };
    assert_eq!(update.validate(), Err(ValidationError::InvalidUri("Bad".to_owned())));
}

#[test]
fn new_event_serializes_kind_as_type() {
    let event = NewEvent { kind: EventKind::Header, value: "Intro".to_owned(), order: Some(1.5) };
    assert_eq!(event.validate(), Ok(()));
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        serde_json::json!({ "type": "header", "value": "Intro", "order": 1.5 })
    );
}

#[test]
fn event_update_rejects_empty_value_only_when_present() {
    assert_eq!(EventUpdate::default().validate(), Ok(()));
    let update = EventUpdate { value: Some(String::new()), ..EventUpdate::default() };
    assert_eq!(update.validate(), Err(ValidationError::EmptyField("value")));
    assert_eq!(serde_json::to_value(EventUpdate::default()).unwrap(), serde_json::json!({}));
}
