use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);

    storage.set_item(AUTH_TOKEN_KEY, "tok").unwrap();
    assert_eq!(storage.get_item(AUTH_TOKEN_KEY).as_deref(), Some("tok"));

    storage.remove_item(AUTH_TOKEN_KEY);
    assert!(!storage.contains_key(AUTH_TOKEN_KEY));
}

#[test]
fn memory_storage_remove_absent_key_is_noop() {
    let mut storage = MemoryStorage::new();
    storage.remove_item("missing");
    assert_eq!(storage, MemoryStorage::new());
}

#[test]
fn with_token_seeds_auth_key() {
    let storage = MemoryStorage::with_token("persisted");
    assert_eq!(storage.get_item("authToken").as_deref(), Some("persisted"));
}
